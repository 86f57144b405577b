//! Error types for book parsing and JSON output.

use thiserror::Error;

/// Errors that abort a core operation.
///
/// Malformed blocks inside the module format file are not errors at this
/// level; they are reported through [`BookParse`](crate::BookParse).
#[derive(Debug, Error)]
pub enum CoreError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results with [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
