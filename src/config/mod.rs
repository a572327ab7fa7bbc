//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Configuration is loaded from a TOML file; secrets (the Discord
//! webhook URLs) come only from environment variables.
//!
//! # Example
//!
//! ```no_run
//! use herald::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.logging.init();
//!     Ok(())
//! }
//! ```

mod discord;
mod ledger;
mod logging;
mod revenue;
mod server;

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use url::Url;

use crate::domain::AccountId;
use crate::error::{ConfigError, Result};

pub use discord::DiscordConfig;
pub use ledger::{LedgerConfig, WatchedAccountConfig};
pub use logging::{LogFormat, LoggingConfig};
pub use revenue::RevenueConfig;
pub use server::ServerConfig;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section has sensible defaults, so an empty
/// file is a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listener settings.
    pub server: ServerConfig,

    /// Logging and tracing configuration.
    pub logging: LoggingConfig,

    /// Discord webhook delivery settings.
    pub discord: DiscordConfig,

    /// Mirror node endpoint and watched accounts.
    pub ledger: LedgerConfig,

    /// Revenue reconciliation thresholds and timing.
    pub revenue: RevenueConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Webhook URLs are loaded from the `DISCORD_WEBHOOK_URL_GAMES` and
    /// `DISCORD_WEBHOOK_URL_REVENUE` environment variables (never from the
    /// config file), and `PORT` overrides the configured listener port.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn apply_env(&mut self) -> Result<()> {
        self.discord.games_webhook = std::env::var("DISCORD_WEBHOOK_URL_GAMES").ok();
        self.discord.revenue_webhook = std::env::var("DISCORD_WEBHOOK_URL_REVENUE").ok();

        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT",
                reason: format!("'{port}' is not a valid port number"),
            })?;
        }

        Ok(())
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(ConfigError::MissingField {
                field: "server.host",
            }
            .into());
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port",
                reason: "must not be 0".to_string(),
            }
            .into());
        }

        if self.discord.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "discord.timeout_secs",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        validate_webhook(
            self.discord.games_webhook.as_deref(),
            "DISCORD_WEBHOOK_URL_GAMES",
        )?;
        validate_webhook(
            self.discord.revenue_webhook.as_deref(),
            "DISCORD_WEBHOOK_URL_REVENUE",
        )?;

        if self.ledger.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ledger.timeout_secs",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        let base = Url::parse(&self.ledger.mirror_base_url).map_err(|e| {
            ConfigError::InvalidValue {
                field: "ledger.mirror_base_url",
                reason: e.to_string(),
            }
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "ledger.mirror_base_url",
                reason: "must be an http(s) URL".to_string(),
            }
            .into());
        }
        if self.ledger.accounts.is_empty() {
            return Err(ConfigError::MissingField {
                field: "ledger.accounts",
            }
            .into());
        }
        let mut labels = HashSet::new();
        for account in &self.ledger.accounts {
            if account.label.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "ledger.accounts",
                    reason: "account labels must not be empty".to_string(),
                }
                .into());
            }
            if !labels.insert(account.label.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "ledger.accounts",
                    reason: format!("duplicate account label '{}'", account.label),
                }
                .into());
            }
            AccountId::parse(account.id.as_str()).map_err(|e| ConfigError::InvalidValue {
                field: "ledger.accounts",
                reason: e.to_string(),
            })?;
        }

        if self.revenue.notify_threshold < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "revenue.notify_threshold",
                reason: "must not be negative".to_string(),
            }
            .into());
        }
        if self.revenue.dedup_window_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "revenue.dedup_window_secs",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.revenue.debounce_bucket_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "revenue.debounce_bucket_secs",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Watched accounts with their IDs parsed and validated.
    ///
    /// Call after [`Config::load`]; validation has already checked every ID.
    pub fn watched_accounts(&self) -> Vec<(String, AccountId)> {
        self.ledger
            .accounts
            .iter()
            .filter_map(|a| {
                AccountId::parse(a.id.as_str())
                    .ok()
                    .map(|id| (a.label.clone(), id))
            })
            .collect()
    }
}

fn validate_webhook(url: Option<&str>, field: &'static str) -> Result<()> {
    let Some(url) = url else {
        return Ok(());
    };
    let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must be an http(s) URL".to_string(),
        }
        .into());
    }
    Ok(())
}
