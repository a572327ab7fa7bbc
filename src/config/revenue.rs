//! Revenue reconciliation tuning.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::Amount;

/// Thresholds and timing for revenue checks and duplicate suppression.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevenueConfig {
    /// Minimum total balance increase (in HBAR) worth announcing.
    pub notify_threshold: Amount,
    /// How long a delivered notification suppresses duplicates, in seconds.
    pub dedup_window_secs: u64,
    /// Width of the scheduling window that coalesces check requests.
    pub debounce_bucket_secs: u64,
    /// Delay between a coinflip settlement and its revenue check.
    pub coinflip_delay_secs: u64,
    /// Delay between a jackpot payout and its revenue check.
    pub jackpot_delay_secs: u64,
}

impl RevenueConfig {
    pub fn dedup_window(&self) -> Duration {
        Duration::from_secs(self.dedup_window_secs)
    }

    pub fn debounce_bucket(&self) -> Duration {
        Duration::from_secs(self.debounce_bucket_secs)
    }

    pub fn coinflip_delay(&self) -> Duration {
        Duration::from_secs(self.coinflip_delay_secs)
    }

    pub fn jackpot_delay(&self) -> Duration {
        Duration::from_secs(self.jackpot_delay_secs)
    }
}

impl Default for RevenueConfig {
    fn default() -> Self {
        Self {
            notify_threshold: default_notify_threshold(),
            dedup_window_secs: 30,
            debounce_bucket_secs: 30,
            coinflip_delay_secs: 15,
            jackpot_delay_secs: 20,
        }
    }
}

fn default_notify_threshold() -> Amount {
    // 0.001 HBAR
    Decimal::new(1, 3)
}
