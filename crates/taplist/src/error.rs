//! Error types for taplist
//!
//! All failures are handled at the boundary where they occur; nothing in the
//! library escalates to a panic in normal operation.

use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for taplist
pub type Result<T> = std::result::Result<T, AppError>;
