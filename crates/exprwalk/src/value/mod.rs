//! Literal payloads carried by expression trees

mod display;
mod impls;

use serde::{Deserialize, Serialize};

/// A scalar literal value.
///
/// Lox has exactly three kinds of scalar literal. The absent literal (`nil`)
/// is not a `Value`; a literal node stores `Option<Value>` and uses `None`
/// for it.
///
/// Serialized untagged, so JSON `true`, `2.5` and `"hi"` map straight onto
/// `Bool`, `Number` and `String`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean: `true` or `false`
    Bool(bool),

    /// Number. Lox has a single numeric type, a 64-bit float.
    Number(f64),

    /// String contents, without surrounding quotes
    String(String),
}
