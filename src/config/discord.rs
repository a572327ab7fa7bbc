//! Discord webhook configuration.

use std::time::Duration;

use serde::Deserialize;

/// Discord delivery settings.
///
/// Webhook URLs are secrets and are never read from the config file. They
/// come from the `DISCORD_WEBHOOK_URL_GAMES` and `DISCORD_WEBHOOK_URL_REVENUE`
/// environment variables. When the revenue webhook is absent, revenue
/// notifications fall back to the games webhook.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    #[serde(skip)]
    pub games_webhook: Option<String>,
    #[serde(skip)]
    pub revenue_webhook: Option<String>,
    /// Request timeout for webhook deliveries, in seconds.
    pub timeout_secs: u64,
}

impl DiscordConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            games_webhook: None,
            revenue_webhook: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

const fn default_timeout_secs() -> u64 {
    10
}
