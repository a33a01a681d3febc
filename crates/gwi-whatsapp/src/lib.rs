//! gwi-whatsapp: WhatsApp webhook for the GWI customer-service bot
//!
//! Receives Twilio WhatsApp webhook POSTs, routes each message to either a
//! balance lookup or a Claude completion, and answers inline with a TwiML
//! reply envelope.

pub mod bot;
pub mod error;
pub mod router;
pub mod twiml;
pub mod webhook;

pub use bot::WhatsAppBot;
pub use error::{Result, WhatsAppError};
pub use twiml::MessagingResponse;
pub use webhook::WebhookServer;
