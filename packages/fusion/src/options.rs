/// Settings for a single conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix of every emitted line after the first. Lets the generated
    /// fusion be embedded into an already indented block.
    pub indentation: String,

    /// Maximum element nesting depth before rendering fails with
    /// [`DepthLimitExceeded`](crate::RenderError::DepthLimitExceeded).
    /// `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = indentation.into();
        self
    }

    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }
}
