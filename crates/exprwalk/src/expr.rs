//! Expression tree
//!
//! The node set is closed: every traversal in this crate matches on all four
//! variants, so adding one is a compile error until each visitor handles it.
//! Each node owns its children outright; trees have no sharing and no cycles.

use serde::{Deserialize, Serialize};

use crate::{Token, Value};

/// A Lox expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A literal value, or `nil`
    Literal(ExprLiteral),

    /// A parenthesized expression
    Grouping(ExprGrouping),

    /// A prefix operator applied to one operand
    Unary(ExprUnary),

    /// An infix operator applied to two operands
    Binary(ExprBinary),
}

/// A literal: `1`, `"text"`, `true`, `nil`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprLiteral {
    /// `None` is `nil`
    pub value: Option<Value>,
}

/// A parenthesized expression: `(expr)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprGrouping {
    /// The expression inside the parentheses
    pub expression: Box<Expr>,
}

/// A prefix operation: `-x`, `!x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprUnary {
    /// The operator token
    pub operator: Token,

    /// The operand
    pub right: Box<Expr>,
}

/// An infix operation: `a + b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprBinary {
    /// Left operand
    pub left: Box<Expr>,

    /// The operator token
    pub operator: Token,

    /// Right operand
    pub right: Box<Expr>,
}

impl Expr {
    /// Create a literal holding `value`.
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(ExprLiteral {
            value: Some(value.into()),
        })
    }

    /// Create the `nil` literal.
    pub fn nil() -> Self {
        Expr::Literal(ExprLiteral { value: None })
    }

    /// Wrap `expression` in a grouping.
    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping(ExprGrouping {
            expression: Box::new(expression),
        })
    }

    /// Create a prefix operation.
    ///
    /// The operator is not checked for being unary-capable.
    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary(ExprUnary {
            operator,
            right: Box::new(right),
        })
    }

    /// Create an infix operation.
    ///
    /// The operator is not checked for being binary-capable.
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary(ExprBinary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }
}

impl From<ExprLiteral> for Expr {
    fn from(expr: ExprLiteral) -> Self {
        Expr::Literal(expr)
    }
}

impl From<ExprGrouping> for Expr {
    fn from(expr: ExprGrouping) -> Self {
        Expr::Grouping(expr)
    }
}

impl From<ExprUnary> for Expr {
    fn from(expr: ExprUnary) -> Self {
        Expr::Unary(expr)
    }
}

impl From<ExprBinary> for Expr {
    fn from(expr: ExprBinary) -> Self {
        Expr::Binary(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenType;

    #[test]
    fn test_nil_has_no_value() {
        assert_eq!(Expr::nil(), Expr::Literal(ExprLiteral { value: None }));
    }

    #[test]
    fn test_binary_owns_children() {
        let plus = Token::operator(TokenType::Plus, "+", 1);
        let expr = Expr::binary(Expr::literal(1), plus.clone(), Expr::literal(2));
        match expr {
            Expr::Binary(b) => {
                assert_eq!(*b.left, Expr::literal(1));
                assert_eq!(b.operator, plus);
                assert_eq!(*b.right, Expr::literal(2));
            }
            other => panic!("expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Expr::grouping(Expr::literal("a"));
        let copy = original.clone();
        assert_eq!(original, copy);
    }
}
