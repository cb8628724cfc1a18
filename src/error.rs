//! Custom error types for workforce-table
//!
//! Only the outer surfaces (loading records, settings, export, CLI) can fail.
//! The normalisation pipeline itself is total and never returns these.

use thiserror::Error;

/// The main error type for workforce-table operations
#[derive(Error, Debug)]
pub enum TableError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed JSON in a records or settings file
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid command-line input or settings values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record loading errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TableError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for workforce-table operations
pub type TableResult<T> = Result<T, TableError>;
