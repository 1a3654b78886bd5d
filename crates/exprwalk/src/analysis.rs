//! Structural measurements over expression trees
//!
//! These visitors produce numbers instead of text, and show that the result
//! type is chosen per visitor.

use crate::expr::{Expr, ExprBinary, ExprGrouping, ExprLiteral, ExprUnary};
use crate::Visitor;

/// Measures the depth of a tree. A lone literal has depth 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct Depth;

impl Depth {
    /// Depth of `expr`.
    pub fn measure(expr: &Expr) -> usize {
        expr.accept(&mut Depth)
    }
}

impl Visitor<usize> for Depth {
    fn visit_literal(&mut self, _expr: &ExprLiteral) -> usize {
        1
    }

    fn visit_grouping(&mut self, expr: &ExprGrouping) -> usize {
        let inner: usize = expr.expression.accept(self);
        1 + inner
    }

    fn visit_unary(&mut self, expr: &ExprUnary) -> usize {
        let right: usize = expr.right.accept(self);
        1 + right
    }

    fn visit_binary(&mut self, expr: &ExprBinary) -> usize {
        let left: usize = expr.left.accept(self);
        let right: usize = expr.right.accept(self);
        1 + left.max(right)
    }
}

/// Counts every node in a tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeCount;

impl NodeCount {
    /// Number of nodes in `expr`, including `expr` itself.
    pub fn count(expr: &Expr) -> usize {
        expr.accept(&mut NodeCount)
    }
}

impl Visitor<usize> for NodeCount {
    fn visit_literal(&mut self, _expr: &ExprLiteral) -> usize {
        1
    }

    fn visit_grouping(&mut self, expr: &ExprGrouping) -> usize {
        let inner: usize = expr.expression.accept(self);
        1 + inner
    }

    fn visit_unary(&mut self, expr: &ExprUnary) -> usize {
        let right: usize = expr.right.accept(self);
        1 + right
    }

    fn visit_binary(&mut self, expr: &ExprBinary) -> usize {
        let left: usize = expr.left.accept(self);
        let right: usize = expr.right.accept(self);
        1 + left + right
    }
}

/// Get a human-readable name for an expression kind.
pub fn kind_name(expr: &Expr) -> &'static str {
    match expr {
        Expr::Literal(_) => "literal",
        Expr::Grouping(_) => "grouping",
        Expr::Unary(_) => "unary operation",
        Expr::Binary(_) => "binary operation",
    }
}
