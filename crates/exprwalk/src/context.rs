//! Rendering configuration

/// Configuration for a rendering call.
///
/// Rendering itself is stateless; the context only sets limits checked
/// before traversal and controls diagnostics.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Maximum tree depth accepted (`None` for no limit)
    pub max_depth: Option<usize>,

    /// Whether to log tree statistics before rendering
    pub trace: bool,
}

impl RenderContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Default::default()
        }
    }

    /// Turn statistics logging on or off.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
