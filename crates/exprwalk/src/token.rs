//! Operator tokens as handed over by a Lox scanner
//!
//! Trees only ever read [`Token::lexeme`]. The kind, literal and line are
//! carried through untouched so that trees built by an external scanner and
//! parser keep their metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Value;

/// Lox token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    // Single-character tokens
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character tokens
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals
    /// Identifier
    Identifier,
    /// String literal
    String,
    /// Number literal
    Number,

    // Keywords
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End of input
    Eof,
}

impl TokenType {
    /// Whether a token of this kind can stand as a prefix operator.
    pub fn is_unary_operator(self) -> bool {
        matches!(self, TokenType::Minus | TokenType::Bang)
    }

    /// Whether a token of this kind can stand between two operands.
    pub fn is_binary_operator(self) -> bool {
        matches!(
            self,
            TokenType::Minus
                | TokenType::Plus
                | TokenType::Slash
                | TokenType::Star
                | TokenType::BangEqual
                | TokenType::EqualEqual
                | TokenType::Greater
                | TokenType::GreaterEqual
                | TokenType::Less
                | TokenType::LessEqual
        )
    }
}

/// A scanned token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Token kind
    pub kind: TokenType,

    /// Source text of the token
    pub lexeme: String,

    /// Literal payload for string and number tokens
    #[serde(default)]
    pub literal: Option<Value>,

    /// Source line (1-indexed)
    #[serde(default)]
    pub line: usize,
}

impl Token {
    /// Create a token with every field given.
    pub fn new(
        kind: TokenType,
        lexeme: impl Into<String>,
        literal: Option<Value>,
        line: usize,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// Create an operator token, which never carries a literal.
    pub fn operator(kind: TokenType, lexeme: impl Into<String>, line: usize) -> Self {
        Self::new(kind, lexeme, None, line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, " {}", literal)?;
        }
        Ok(())
    }
}
