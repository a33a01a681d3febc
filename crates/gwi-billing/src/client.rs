//! Balance lookup client

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};

use gwi_core::BillingConfig;

use crate::error::{BillingError, Result};
use crate::models::BalanceRecord;

/// Timeout for balance lookups. The billing API is the only
/// failure-sensitive dependency; callers get reply text, not errors.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the GWI billing API
#[derive(Debug, Clone)]
pub struct BalanceClient {
    client: Client,
    config: BillingConfig,
    base_url: String,
}

impl BalanceClient {
    /// Create a new balance client
    pub fn new(config: BillingConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .map_err(|e| BillingError::Config(e.to_string()))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        info!("Balance client initialized for: {}", base_url);

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Look up the balance for an account and render it as reply text.
    ///
    /// Every failure path returns immediately with a user-facing string;
    /// no retries, nothing escapes this function.
    pub async fn customer_balance(&self, account_id: &str) -> String {
        let url = format!("{}/customer_balance/{}", self.base_url, account_id);

        debug!("Fetching balance from: {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                error!("Balance API request failed: {}", e);
                return "Error fetching balance. Please try again later.".to_string();
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to read balance API response: {}", e);
                return "Error fetching balance. Please try again later.".to_string();
            }
        };

        render_response(status, &body, account_id)
    }
}

/// Map a billing API response to reply text.
fn render_response(status: StatusCode, body: &str, account_id: &str) -> String {
    match status {
        StatusCode::OK => {
            let value: serde_json::Value = match serde_json::from_str(body) {
                Ok(value) => value,
                Err(e) => {
                    error!("Balance API returned invalid JSON: {}", e);
                    return "Error reading balance information. Please try again later."
                        .to_string();
                }
            };

            // The backend signals "not found" with a message field instead
            // of balance fields.
            if value.get("message").is_some() {
                return format!("No balance found for account {}.", account_id);
            }

            let record: BalanceRecord = match serde_json::from_value(value) {
                Ok(record) => record,
                Err(e) => {
                    error!("Balance API returned unexpected fields: {}", e);
                    return "Error reading balance information. Please try again later."
                        .to_string();
                }
            };

            format!(
                "Customer: {} {}\nAccount: {}\nBalance: GYD {}",
                record.first_name, record.last_name, account_id, record.balance
            )
        }
        StatusCode::UNAUTHORIZED => {
            error!("Balance API rejected credentials (401)");
            "Error: Unauthorized to access balance API.".to_string()
        }
        other => {
            error!("Balance API returned status {}", other);
            format!(
                "Error fetching balance (status {}). Please try again later.",
                other.as_u16()
            )
        }
    }
}
