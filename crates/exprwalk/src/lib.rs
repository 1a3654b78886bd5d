//! # exprwalk
//!
//! Visitor-driven traversal and rendering of Lox expression trees.
//!
//! Trees are built from four node kinds (literal, grouping, unary, binary),
//! either directly in code or decoded from JSON. Every operation over a tree
//! is a [`Visitor`]: one handler per node kind, dispatched by
//! [`Expr::accept`]. New operations never touch the node definitions.
//!
//! ## Renderers
//!
//! - [`RpnPrinter`]: postfix, `(2 + 3) * 4` as `2 3 + 4 *`
//! - [`AstPrinter`]: parenthesized prefix, `(* (group (+ 2 3)) 4)`
//!
//! ```
//! use exprwalk::{Expr, RpnPrinter, Token, TokenType};
//!
//! let expr = Expr::binary(
//!     Expr::literal(2),
//!     Token::operator(TokenType::Plus, "+", 1),
//!     Expr::literal(3),
//! );
//! assert_eq!(RpnPrinter::new().print(&expr), "2 3 +");
//! ```
//!
//! The postfix printer renders prefix operations as empty text; see
//! [`RpnPrinter`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod context;
pub mod error;
pub mod expr;
pub mod render;
pub mod token;
pub mod tree;
pub mod value;
pub mod visitor;

// Re-export main types
pub use analysis::{kind_name, Depth, NodeCount};
pub use context::RenderContext;
pub use error::{ExprWalkError, Result};
pub use expr::{Expr, ExprBinary, ExprGrouping, ExprLiteral, ExprUnary};
pub use render::{render, render_with, to_ast, to_rpn, AstPrinter, Format, RpnPrinter};
pub use token::{Token, TokenType};
pub use value::Value;
pub use visitor::Visitor;

/// exprwalk version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
