//! Error types for JSEL

use crate::kind::ValueKind;
use thiserror::Error;

/// JSEL error types
#[derive(Debug, Error)]
pub enum SelectError {
    /// Indices value is not an integer or an array of integers.
    #[error("Indices must be an integer or an array of integers, got {0}")]
    IndicesType(ValueKind),
    /// An index falls outside the source list.
    #[error("Index {index} is out of bounds for list of length {len}")]
    OutOfBounds {
        /// The offending index as supplied.
        index: i64,
        /// Length of the source list.
        len: usize,
    },
    /// I/O operation failed while reading or writing a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SelectError>;
