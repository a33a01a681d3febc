//! gwi-core: GWI WhatsApp Bot Core Library
//!
//! Configuration loading, the shared error type, and the Claude API client
//! used for the conversational path of the bot.

pub mod config;
pub mod error;
pub mod llm;

pub use config::{BillingConfig, Config, LlmConfig, WebhookConfig};
pub use error::{Error, Result};
pub use llm::{ClaudeClient, Message, MessageContent, MessagesRequest, MessagesResponse};
