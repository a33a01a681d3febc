//! WhatsApp bot wrapper

use std::net::SocketAddr;
use std::sync::Arc;

use crate::error::Result;
use crate::webhook::WebhookServer;

use gwi_billing::BalanceClient;
use gwi_core::ClaudeClient;

/// WhatsApp bot wrapper
pub struct WhatsAppBot {
    claude_client: Arc<ClaudeClient>,
    balance_client: Arc<BalanceClient>,
    port: u16,
}

impl WhatsAppBot {
    /// Create a new WhatsApp bot
    pub fn new(
        claude_client: Arc<ClaudeClient>,
        balance_client: Arc<BalanceClient>,
        port: u16,
    ) -> Self {
        Self {
            claude_client,
            balance_client,
            port,
        }
    }

    /// Start the bot (webhook server)
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = ([0, 0, 0, 0], self.port).into();
        let server = WebhookServer::new(addr, self.claude_client, self.balance_client);

        server.start().await
    }
}
