//! JSON encoding of expression trees
//!
//! Trees are externally tagged by variant. A literal's value is a bare JSON
//! scalar, or `null` for `nil`:
//!
//! ```json
//! {"Binary": {
//!     "left": {"Literal": {"value": 1}},
//!     "operator": {"kind": "Plus", "lexeme": "+", "literal": null, "line": 1},
//!     "right": {"Literal": {"value": null}}
//! }}
//! ```
//!
//! A token's `literal` and `line` may be omitted.

use std::io::Read;

use crate::{Expr, Result};

/// Decode a tree from a JSON string.
pub fn from_json(source: &str) -> Result<Expr> {
    let expr = serde_json::from_str(source)?;
    tracing::debug!(bytes = source.len(), "decoded expression tree");
    Ok(expr)
}

/// Decode a tree from a JSON reader.
pub fn from_reader(reader: impl Read) -> Result<Expr> {
    Ok(serde_json::from_reader(reader)?)
}

/// Encode a tree as indented JSON.
pub fn to_json_pretty(expr: &Expr) -> Result<String> {
    Ok(serde_json::to_string_pretty(expr)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExprWalkError, Token, TokenType, Value};

    #[test]
    fn test_literal_scalars() {
        assert_eq!(
            from_json(r#"{"Literal": {"value": 2}}"#).unwrap(),
            Expr::literal(2)
        );
        assert_eq!(
            from_json(r#"{"Literal": {"value": "two"}}"#).unwrap(),
            Expr::literal("two")
        );
        assert_eq!(
            from_json(r#"{"Literal": {"value": true}}"#).unwrap(),
            Expr::literal(true)
        );
        assert_eq!(
            from_json(r#"{"Literal": {"value": null}}"#).unwrap(),
            Expr::nil()
        );
    }

    #[test]
    fn test_token_defaults() {
        let expr = from_json(
            r#"{"Unary": {"operator": {"kind": "Bang", "lexeme": "!"},
                          "right": {"Literal": {"value": false}}}}"#,
        )
        .unwrap();
        assert_eq!(
            expr,
            Expr::unary(
                Token::new(TokenType::Bang, "!", None, 0),
                Expr::literal(Value::Bool(false)),
            )
        );
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let err = from_json(r#"{"Call": {"callee": null}}"#).unwrap_err();
        assert!(matches!(err, ExprWalkError::Json(_)));
    }

    #[test]
    fn test_from_reader() {
        let json = r#"{"Grouping": {"expression": {"Literal": {"value": 1.5}}}}"#;
        let expr = from_reader(json.as_bytes()).unwrap();
        assert_eq!(expr, Expr::grouping(Expr::literal(1.5)));
    }

    #[test]
    fn test_pretty_output_decodes() {
        let expr = Expr::grouping(Expr::literal("a"));
        let json = to_json_pretty(&expr).unwrap();
        assert!(json.contains("\"Grouping\""));
        assert_eq!(from_json(&json).unwrap(), expr);
    }
}
