//! Text renderings of expression trees

pub mod ast;
pub mod rpn;

use std::fmt;
use std::str::FromStr;

use crate::analysis::{kind_name, Depth, NodeCount};
use crate::expr::{Expr, ExprLiteral};
use crate::{ExprWalkError, RenderContext, Result};

pub use ast::{to_ast, AstPrinter};
pub use rpn::{to_rpn, RpnPrinter};

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Postfix: `1 2 +`
    #[default]
    Rpn,

    /// Parenthesized prefix: `(+ 1 2)`
    Ast,
}

impl Format {
    /// Every format, in display order.
    pub const ALL: [Format; 2] = [Format::Rpn, Format::Ast];

    /// The name used on command lines and in logs.
    pub fn name(self) -> &'static str {
        match self {
            Format::Rpn => "rpn",
            Format::Ast => "ast",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ExprWalkError;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ExprWalkError::UnknownFormat(s.to_string()))
    }
}

/// Display text shared by every renderer for a literal node.
pub(crate) fn literal_text(expr: &ExprLiteral) -> String {
    match &expr.value {
        Some(value) => value.to_string(),
        None => String::from("nil"),
    }
}

/// Render `expr` in `format`. Never fails.
pub fn render(expr: &Expr, format: Format) -> String {
    tracing::trace!(%format, root = kind_name(expr), "render");
    match format {
        Format::Rpn => RpnPrinter.print(expr),
        Format::Ast => AstPrinter.print(expr),
    }
}

/// Render `expr` in `format` under the limits in `ctx`.
///
/// The depth check runs before any text is produced, so a refused tree
/// costs one extra walk and no output.
pub fn render_with(expr: &Expr, format: Format, ctx: &RenderContext) -> Result<String> {
    let depth = Depth::measure(expr);
    if let Some(limit) = ctx.max_depth {
        if depth > limit {
            tracing::debug!(depth, limit, "expression tree too deep");
            return Err(ExprWalkError::DepthExceeded { depth, limit });
        }
    }

    if ctx.trace {
        tracing::debug!(
            %format,
            depth,
            nodes = NodeCount::count(expr),
            root = kind_name(expr),
            "rendering expression tree"
        );
    }

    Ok(render(expr, format))
}
