//! Error types for gwi-core

use thiserror::Error;

/// Main error type for gwi-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Claude API error: {0}")]
    ClaudeApi(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for gwi-core
pub type Result<T> = std::result::Result<T, Error>;
