//! Configuration management
//!
//! Settings are resolved in the following order:
//! 1. Environment variables
//! 2. gwi-bot.toml configuration file
//! 3. Default values
//!
//! Inside the configuration file, `${VAR_NAME}` expands to the value of the
//! named environment variable.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Error;

/// LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Claude API key
    pub api_key: String,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

/// GWI billing API configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BillingConfig {
    /// Base URL of the billing API (no trailing slash)
    pub base_url: String,
    /// Username for HTTP Basic Auth
    pub username: String,
    /// Password for HTTP Basic Auth
    pub password: String,
}

/// Webhook server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Port for the webhook HTTP server
    #[serde(default = "default_webhook_port")]
    pub port: u16,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            port: default_webhook_port(),
        }
    }
}

fn default_webhook_port() -> u16 {
    5000
}

/// Main configuration for the GWI WhatsApp bot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// LLM configuration
    #[serde(default)]
    pub llm: LlmConfig,

    /// Billing API configuration
    #[serde(default)]
    pub billing: BillingConfig,

    /// Webhook server configuration
    #[serde(default)]
    pub webhook: WebhookConfig,
}

impl Config {
    /// Expand `${VAR_NAME}` references to environment variable values.
    ///
    /// Unknown variables expand to the empty string.
    fn expand_env_vars(value: &str) -> String {
        let mut result = String::new();
        let mut chars = value.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '$' && chars.peek() == Some(&'{') {
                chars.next(); // consume '{'

                let mut var_name = String::new();
                while let Some(&c) = chars.peek() {
                    if c == '}' {
                        chars.next(); // consume '}'
                        break;
                    }
                    var_name.push(chars.next().unwrap());
                }

                if let Ok(env_value) = std::env::var(&var_name) {
                    result.push_str(&env_value);
                }
            } else {
                result.push(c);
            }
        }

        result
    }

    /// Load configuration from a TOML file.
    ///
    /// `${VAR_NAME}` references inside the file are expanded before parsing,
    /// and environment variables override the parsed values afterwards.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();

        let toml_content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let expanded_content = Self::expand_env_vars(&toml_content);

        let mut config: Config = toml::from_str(&expanded_content)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Tries `./gwi-bot.toml` first; falls back to environment variables only.
    pub fn load() -> crate::Result<Self> {
        if Path::new("gwi-bot.toml").exists() {
            return Self::from_toml_file("gwi-bot.toml");
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config {
            llm: LlmConfig::default(),
            billing: BillingConfig::default(),
            webhook: WebhookConfig::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Overwrite settings from environment variables where present
    fn apply_env_overrides(&mut self) {
        // API key from either LLM_API_KEY or CLAUDE_API_KEY
        if let Ok(key) = std::env::var("LLM_API_KEY").or_else(|_| std::env::var("CLAUDE_API_KEY"))
        {
            self.llm.api_key = key;
        }

        // Model from either LLM_MODEL or CLAUDE_MODEL
        if let Ok(model) = std::env::var("LLM_MODEL").or_else(|_| std::env::var("CLAUDE_MODEL")) {
            self.llm.model = model;
        }

        if let Ok(url) = std::env::var("GWI_API_BASE_URL") {
            self.billing.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(username) = std::env::var("GWI_API_USERNAME") {
            self.billing.username = username;
        }
        if let Ok(password) = std::env::var("GWI_API_PASSWORD") {
            self.billing.password = password;
        }

        if let Ok(port) = std::env::var("WEBHOOK_PORT") {
            if let Ok(port) = port.parse() {
                self.webhook.port = port;
            }
        }
    }

    /// Check that required settings are present
    fn validate(&self) -> crate::Result<()> {
        if self.llm.api_key.is_empty() {
            return Err(Error::Config(
                "LLM_API_KEY or CLAUDE_API_KEY not set".to_string(),
            ));
        }
        if self.billing.base_url.is_empty() {
            return Err(Error::Config("GWI_API_BASE_URL not set".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_env_vars() {
        unsafe { std::env::set_var("GWI_TEST_EXPAND_VAR", "hello") };
        let expanded = Config::expand_env_vars("value = \"${GWI_TEST_EXPAND_VAR}\"");
        assert_eq!(expanded, "value = \"hello\"");
    }

    #[test]
    fn test_expand_env_vars_missing() {
        let expanded = Config::expand_env_vars("value = \"${GWI_TEST_NO_SUCH_VAR}\"");
        assert_eq!(expanded, "value = \"\"");
    }

    #[test]
    fn test_expand_env_vars_plain_text() {
        let expanded = Config::expand_env_vars("no variables here, $100 flat");
        assert_eq!(expanded, "no variables here, $100 flat");
    }

    #[test]
    fn test_default_webhook_port() {
        let config = WebhookConfig::default();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_parse_toml_config() {
        let toml_content = r#"
[llm]
api_key = "sk-test"
model = "claude-sonnet-4-20250514"

[billing]
base_url = "https://billing.example.com/api"
username = "gwi"
password = "secret"

[webhook]
port = 8080
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.llm.api_key, "sk-test");
        assert_eq!(config.billing.username, "gwi");
        assert_eq!(config.webhook.port, 8080);
    }
}
