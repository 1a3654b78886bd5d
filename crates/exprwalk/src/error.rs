//! Error types for exprwalk
//!
//! Rendering a tree never fails. These errors come from the edges: decoding
//! trees, picking a format by name, and configured limits.

use thiserror::Error;

/// Main error type for exprwalk operations
#[derive(Error, Debug)]
pub enum ExprWalkError {
    /// Tree document could not be decoded or encoded
    #[error("Tree JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tree is deeper than the configured limit
    #[error("Expression tree depth {depth} exceeds limit {limit}")]
    DepthExceeded {
        /// Measured depth of the tree
        depth: usize,
        /// Configured maximum depth
        limit: usize,
    },

    /// No format with this name
    #[error("Unknown format: {0} (expected one of: rpn, ast)")]
    UnknownFormat(String),
}

/// Result type alias for exprwalk operations
pub type Result<T> = std::result::Result<T, ExprWalkError>;
