//! Parenthesized prefix rendering

use crate::expr::{Expr, ExprBinary, ExprGrouping, ExprLiteral, ExprUnary};
use crate::Visitor;

use super::literal_text;

/// Renders expressions as fully parenthesized prefix forms.
///
/// `-123 * (45.67)` renders as `(* (- 123) (group 45.67))`. Every node
/// shows up in the output, which makes this the printer to reach for when
/// checking the shape of a tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    /// Create a printer.
    pub fn new() -> Self {
        Self
    }

    /// Render `expr`.
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = String::from("(");
        out.push_str(name);
        for expr in exprs {
            let rendered: String = expr.accept(self);
            out.push(' ');
            out.push_str(&rendered);
        }
        out.push(')');
        out
    }
}

impl Visitor<String> for AstPrinter {
    fn visit_literal(&mut self, expr: &ExprLiteral) -> String {
        literal_text(expr)
    }

    fn visit_grouping(&mut self, expr: &ExprGrouping) -> String {
        self.parenthesize("group", &[&*expr.expression])
    }

    fn visit_unary(&mut self, expr: &ExprUnary) -> String {
        self.parenthesize(&expr.operator.lexeme, &[&*expr.right])
    }

    fn visit_binary(&mut self, expr: &ExprBinary) -> String {
        self.parenthesize(&expr.operator.lexeme, &[&*expr.left, &*expr.right])
    }
}

/// Render `expr` as a parenthesized prefix form.
pub fn to_ast(expr: &Expr) -> String {
    AstPrinter.print(expr)
}
