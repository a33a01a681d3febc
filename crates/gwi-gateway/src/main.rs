//! gwi-gateway: GWI WhatsApp Bot Main Binary
//!
//! Main entry point for the Guyana Water Inc. WhatsApp customer-service bot.
//!
//! Usage:
//!   gwi-gateway          - Start the webhook server
//!   gwi-gateway --help   - Show help

use std::sync::Arc;

use gwi_billing::BalanceClient;
use gwi_core::{ClaudeClient, Config};
use gwi_whatsapp::WhatsAppBot;
use tracing_subscriber::EnvFilter;

/// Run mode
enum RunMode {
    /// Webhook server mode
    Server,
    /// Show help
    Help,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match parse_args() {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("gwi-gateway {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        RunMode::Server => {}
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = Config::load().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    tracing::info!("Starting gwi-gateway...");
    tracing::info!("Model: {}", config.llm.model);

    // Long-lived clients, constructed once and shared across requests
    let claude_client = ClaudeClient::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to create Claude client: {}", e))?;
    let balance_client = BalanceClient::new(config.billing.clone())
        .map_err(|e| anyhow::anyhow!("Failed to create balance client: {}", e))?;

    let bot = WhatsAppBot::new(
        Arc::new(claude_client),
        Arc::new(balance_client),
        config.webhook.port,
    );

    bot.start()
        .await
        .map_err(|e| anyhow::anyhow!("Webhook server error: {}", e))
}

/// Parse command line arguments
fn parse_args() -> RunMode {
    let args: Vec<String> = std::env::args().collect();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => return RunMode::Help,
            "--version" | "-v" => return RunMode::Version,
            _ => {}
        }
    }

    RunMode::Server
}

/// Print help message
fn print_help() {
    println!("gwi-gateway - Guyana Water Inc. WhatsApp Bot");
    println!();
    println!("Usage:");
    println!("  gwi-gateway           Start the webhook server");
    println!("  gwi-gateway --help    Show this help message");
    println!("  gwi-gateway --version Show version");
    println!();
    println!("Environment Variables:");
    println!("  LLM_API_KEY           Claude API key (required, or CLAUDE_API_KEY)");
    println!("  LLM_MODEL             Model name (default: claude-sonnet-4-20250514)");
    println!("  GWI_API_BASE_URL      Billing API base URL (required)");
    println!("  GWI_API_USERNAME      Billing API username");
    println!("  GWI_API_PASSWORD      Billing API password");
    println!("  WEBHOOK_PORT          Webhook server port (default: 5000)");
}
