//! Postfix (Reverse Polish) rendering

use crate::expr::{Expr, ExprBinary, ExprGrouping, ExprLiteral, ExprUnary};
use crate::Visitor;

use super::literal_text;

/// Renders expressions operands-first, operator-last.
///
/// `1 + 2` renders as `1 2 +`. Groupings add nothing. Prefix operations
/// render as the empty string: they have no postfix form here, and the
/// enclosing node keeps its separators, so `5 - -1` renders as `5  -`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RpnPrinter;

impl RpnPrinter {
    /// Create a printer.
    pub fn new() -> Self {
        Self
    }

    /// Render `expr`.
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn rpn(&mut self, symbol: &str, left: &Expr, right: &Expr) -> String {
        let mut out: String = left.accept(self);
        let right: String = right.accept(self);
        out.push(' ');
        out.push_str(&right);
        out.push(' ');
        out.push_str(symbol);
        out
    }
}

impl Visitor<String> for RpnPrinter {
    fn visit_literal(&mut self, expr: &ExprLiteral) -> String {
        literal_text(expr)
    }

    fn visit_grouping(&mut self, expr: &ExprGrouping) -> String {
        expr.expression.accept(self)
    }

    fn visit_unary(&mut self, _expr: &ExprUnary) -> String {
        // No postfix form for prefix operators yet; operand and operator
        // are both dropped.
        String::new()
    }

    fn visit_binary(&mut self, expr: &ExprBinary) -> String {
        self.rpn(&expr.operator.lexeme, &expr.left, &expr.right)
    }
}

/// Render `expr` in postfix order.
pub fn to_rpn(expr: &Expr) -> String {
    RpnPrinter.print(expr)
}
