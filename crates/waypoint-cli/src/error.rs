//! Error types for waypoint CLI operations.

use std::io;
use thiserror::Error;

/// The error type for waypoint CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A script line failed to parse or execute.
    #[error("line {line}: {message}")]
    Script {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },
}

/// A specialized Result type for waypoint CLI operations.
pub type Result<T> = std::result::Result<T, Error>;
