//! Error types for reading-plan extraction.
//!
//! Every variant is fatal for an extraction run; there is no partial result.

use thiserror::Error;

/// Errors that can occur while reading a plan database.
#[derive(Debug, Error)]
pub enum SqliteError {
    /// SQLite database operation failure.
    #[error("database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    /// A stored value has no JSON representation.
    #[error("conversion error: {0}")]
    ConversionError(String),

    /// A required table is absent from the database.
    #[error("missing table: {0}")]
    MissingTable(String),

    /// The connection could not be closed cleanly.
    #[error("failed to close database: {0}")]
    CloseError(rusqlite::Error),
}

/// Convenience alias for results with [`SqliteError`].
pub type Result<T> = std::result::Result<T, SqliteError>;
