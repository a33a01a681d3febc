//! Webhook server for receiving WhatsApp messages from Twilio

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Form, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tracing::{debug, error, info};

use gwi_billing::BalanceClient;
use gwi_core::ClaudeClient;

use crate::error::{Result, WhatsAppError};
use crate::router::account_id;
use crate::twiml::MessagingResponse;

/// Instruction embedded in every conversational request
const ASSISTANT_PROMPT: &str = "You are a Guyana Water Inc. WhatsApp assistant.\n\
Help users check their water account balances and answer general queries.\n\
Be short, clear, and professional.";

/// Reply when the conversational path fails
const ASSISTANT_FALLBACK: &str =
    "Sorry, I could not process your message. Please try again later.";

/// Reply when a balance lookup yields nothing usable
const EMPTY_BALANCE_FALLBACK: &str = "Sorry, we could not find your account or balance.";

/// Body returned by the health-check route
const HEALTH_MESSAGE: &str = "GWI WhatsApp Bot is running!";

/// Webhook server state
#[derive(Clone)]
pub struct WebhookState {
    pub claude_client: Arc<ClaudeClient>,
    pub balance_client: Arc<BalanceClient>,
}

/// Webhook server
pub struct WebhookServer {
    addr: SocketAddr,
    state: WebhookState,
}

/// Incoming WhatsApp message from the Twilio webhook.
///
/// Only the message text matters to the bot; a missing `Body` field is
/// treated as an empty message.
#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    #[serde(rename = "Body", default)]
    pub body: String,
}

impl WebhookServer {
    /// Create a new webhook server
    pub fn new(
        addr: SocketAddr,
        claude_client: Arc<ClaudeClient>,
        balance_client: Arc<BalanceClient>,
    ) -> Self {
        let state = WebhookState {
            claude_client,
            balance_client,
        };

        Self { addr, state }
    }

    /// Start the webhook server
    pub async fn start(self) -> Result<()> {
        info!("Starting WhatsApp webhook server on {}", self.addr);

        let app = Router::new()
            .route("/", get(health))
            .route("/webhook", post(handle_webhook))
            .with_state(Arc::new(self.state));

        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|e| WhatsAppError::Config(e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| WhatsAppError::Http(e.to_string()))?;

        Ok(())
    }
}

/// Health check route
async fn health() -> &'static str {
    HEALTH_MESSAGE
}

/// Handle an incoming WhatsApp webhook.
///
/// Always answers HTTP 200 with a TwiML envelope; failures of either
/// outbound call become reply text, never protocol-level errors.
async fn handle_webhook(
    State(state): State<Arc<WebhookState>>,
    Form(msg): Form<IncomingMessage>,
) -> impl IntoResponse {
    debug!("Incoming WhatsApp message: {}", msg.body);

    let reply = match account_id(&msg.body) {
        Some(id) => {
            info!("Balance lookup for account {}", id);
            balance_reply(state.balance_client.customer_balance(id).await)
        }
        None => match ask_assistant(&state, &msg.body).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Conversational reply failed: {}", e);
                ASSISTANT_FALLBACK.to_string()
            }
        },
    };

    debug!("Reply to WhatsApp: {}", reply);

    let xml = MessagingResponse::new().message(reply).to_xml();
    ([(header::CONTENT_TYPE, "text/xml")], xml)
}

/// Guard against an empty lookup result reaching the user as a blank message
fn balance_reply(reply: String) -> String {
    if reply.is_empty() {
        EMPTY_BALANCE_FALLBACK.to_string()
    } else {
        reply
    }
}

/// Build the single user-role prompt for a conversational request.
///
/// The inbound text goes in untouched; the fixed instruction rides along in
/// the same message.
fn assistant_prompt(incoming: &str) -> String {
    format!("{}\n\nUser message:\n{}", ASSISTANT_PROMPT, incoming)
}

/// Answer a general query with Claude.
///
/// One stateless completion per request, no conversation memory.
async fn ask_assistant(state: &WebhookState, incoming: &str) -> gwi_core::Result<String> {
    let request = state
        .claude_client
        .request_builder()
        .max_tokens(200)
        .user(assistant_prompt(incoming))
        .build();

    let response = state.claude_client.messages(request).await?;

    response
        .first_text()
        .map(str::to_string)
        .ok_or_else(|| gwi_core::Error::ClaudeApi("Response contained no text".to_string()))
}
