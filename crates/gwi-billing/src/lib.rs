//! gwi-billing: GWI billing API client
//!
//! Customer balance lookups against the GWI billing REST API. Every outcome
//! of a lookup, including failures, is rendered as reply text for the chat
//! channel; nothing here surfaces as an HTTP-level error.

pub mod client;
pub mod error;
pub mod models;

pub use client::BalanceClient;
pub use error::{BillingError, Result};
pub use models::BalanceRecord;
