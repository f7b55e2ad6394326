//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for textscan operations
#[derive(Debug, Error)]
pub enum Error {
    /// The input file does not exist
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The input file holds bytes that are not valid UTF-8
    #[error("could not decode {path} as UTF-8")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
