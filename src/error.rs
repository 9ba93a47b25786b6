//! Error types for the kelvin library.
//!
//! This module defines a single error enum covering every failure condition
//! in the library, from builder input validation to file and network I/O.

use thiserror::Error;

/// The main error type for kelvin operations.
#[derive(Error, Debug)]
pub enum KelvinError {
    /// Invalid builder or renderer input
    #[error("Invalid parameter: {param} - {message}")]
    Validation { param: String, message: String },

    /// Malformed color table contents
    #[error("Color table error in {path} (line {line}): {message}")]
    Table {
        path: String,
        line: usize,
        message: String,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP download errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Image encoding errors
    #[error("Image error: {message}")]
    Image { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with KelvinError
pub type Result<T> = std::result::Result<T, KelvinError>;
