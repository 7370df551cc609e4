//! Error types for the themescope engine.
//!
//! Resolution and color classification are total and have no error type.
//! Only filesystem aggregation can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for a whole aggregation request.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("Themes directory not found: {}", .path.display())]
    RootNotFound { path: PathBuf },

    #[error("Themes path is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to read themes directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors for a single stylesheet. These are recorded and the file is skipped.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is not valid UTF-8")]
    InvalidUtf8,

    #[error("Directory walk failed: {0}")]
    Walk(String),
}

impl ReadError {
    /// Classify an I/O error from reading a file to a string.
    pub fn from_read(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::InvalidData {
            ReadError::InvalidUtf8
        } else {
            ReadError::Io(err)
        }
    }
}
