//! Error types for the batch crate.

use snomed_cnl_renderer::RenderError;

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

/// Errors that can occur during batch rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    /// A single concept failed to render.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Some concepts of a batch failed to render.
    #[error("{failed} of {total} concepts failed to render")]
    Incomplete {
        /// Number of failed concepts.
        failed: usize,
        /// Number of concepts in the batch.
        total: usize,
    },
}
