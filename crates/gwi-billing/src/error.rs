//! Error types for gwi-billing

use thiserror::Error;

/// gwi-billing error type
///
/// Only client construction can fail; lookups render every outcome into
/// reply text instead of returning an error.
#[derive(Error, Debug)]
pub enum BillingError {
    #[error("Billing API configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BillingError>;
