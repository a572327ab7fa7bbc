//! Balance ledger (mirror node) configuration.

use std::time::Duration;

use serde::Deserialize;

/// Mirror node endpoint and the platform accounts watched for revenue.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Base URL of the Hedera mirror node REST API.
    pub mirror_base_url: String,
    /// Request timeout for balance lookups, in seconds.
    pub timeout_secs: u64,
    /// Accounts whose combined balance is treated as platform revenue.
    pub accounts: Vec<WatchedAccountConfig>,
}

/// One watched account entry from the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchedAccountConfig {
    /// Short label used in notifications and stats, e.g. `coinflip`.
    pub label: String,
    /// Hedera account ID, e.g. `0.0.9276566`.
    pub id: String,
}

impl LedgerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            mirror_base_url: default_mirror_base_url(),
            timeout_secs: default_timeout_secs(),
            accounts: default_accounts(),
        }
    }
}

fn default_mirror_base_url() -> String {
    "https://mainnet-public.mirrornode.hedera.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_accounts() -> Vec<WatchedAccountConfig> {
    vec![
        WatchedAccountConfig {
            label: "coinflip".to_string(),
            id: "0.0.9276566".to_string(),
        },
        WatchedAccountConfig {
            label: "jackpot".to_string(),
            id: "0.0.9314288".to_string(),
        },
    ]
}
