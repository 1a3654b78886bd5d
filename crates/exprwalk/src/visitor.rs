//! Visitor dispatch over expression trees

use crate::expr::{Expr, ExprBinary, ExprGrouping, ExprLiteral, ExprUnary};

/// An operation over expression trees producing an `R` per node.
///
/// This is the core abstraction for every traversal: renderers, analyzers,
/// and anything else callers want to add. Each node kind gets one handler.
/// Dispatch is single-level; a handler that needs a child's result calls
/// [`Expr::accept`] on that child itself.
pub trait Visitor<R> {
    /// Handle a literal node.
    fn visit_literal(&mut self, expr: &ExprLiteral) -> R;

    /// Handle a grouping node.
    fn visit_grouping(&mut self, expr: &ExprGrouping) -> R;

    /// Handle a prefix operation node.
    fn visit_unary(&mut self, expr: &ExprUnary) -> R;

    /// Handle an infix operation node.
    fn visit_binary(&mut self, expr: &ExprBinary) -> R;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Expr {
    /// Run the handler of `visitor` that matches this node's variant.
    pub fn accept<R, V>(&self, visitor: &mut V) -> R
    where
        V: Visitor<R> + ?Sized,
    {
        match self {
            Expr::Literal(expr) => visitor.visit_literal(expr),
            Expr::Grouping(expr) => visitor.visit_grouping(expr),
            Expr::Unary(expr) => visitor.visit_unary(expr),
            Expr::Binary(expr) => visitor.visit_binary(expr),
        }
    }
}
