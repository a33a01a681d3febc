//! Error types for gwi-whatsapp

use thiserror::Error;

/// gwi-whatsapp error type
#[derive(Error, Debug)]
pub enum WhatsAppError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, WhatsAppError>;
