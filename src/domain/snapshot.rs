//! Balance snapshots and the deltas between them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::ids::AccountId;
use crate::domain::money::Amount;

/// One watched account's balance at observation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub label: String,
    pub account: AccountId,
    pub balance: Amount,
}

/// Balances of every watched account at a single point in time.
///
/// `observed_at` is `None` until the first successful observation, which
/// marks the snapshot as an empty baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSnapshot {
    pub accounts: Vec<AccountBalance>,
    pub total: Amount,
    pub observed_at: Option<DateTime<Utc>>,
}

impl BalanceSnapshot {
    /// Build a snapshot from per-account balances, computing the total.
    pub fn new(accounts: Vec<AccountBalance>, observed_at: Option<DateTime<Utc>>) -> Self {
        let total = accounts.iter().map(|a| a.balance).sum();
        Self {
            accounts,
            total,
            observed_at,
        }
    }

    /// Whether this snapshot has never observed the ledger.
    pub fn is_unobserved(&self) -> bool {
        self.observed_at.is_none()
    }

    /// Balance for a labelled account, if present.
    pub fn balance_for(&self, label: &str) -> Option<Amount> {
        self.accounts
            .iter()
            .find(|a| a.label == label)
            .map(|a| a.balance)
    }
}

/// Per-account movement between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceDelta {
    pub label: String,
    pub previous: Amount,
    pub current: Amount,
    pub increase: Amount,
}

/// The result of replacing one snapshot with the next.
#[derive(Debug, Clone)]
pub struct SnapshotDiff {
    pub previous: BalanceSnapshot,
    pub current: BalanceSnapshot,
    pub deltas: Vec<BalanceDelta>,
    pub total_increase: Amount,
    pub is_baseline: bool,
}

impl SnapshotDiff {
    /// Compare a new observation against the snapshot it replaced.
    ///
    /// When the previous snapshot never observed the ledger the new one is
    /// a baseline: there is nothing to compare against, so the deltas are
    /// empty and the increase is zero.
    pub fn between(previous: BalanceSnapshot, current: BalanceSnapshot) -> Self {
        if previous.is_unobserved() {
            return Self {
                previous,
                current,
                deltas: Vec::new(),
                total_increase: Amount::ZERO,
                is_baseline: true,
            };
        }

        let deltas = current
            .accounts
            .iter()
            .map(|account| {
                let before = previous.balance_for(&account.label).unwrap_or(Amount::ZERO);
                BalanceDelta {
                    label: account.label.clone(),
                    previous: before,
                    current: account.balance,
                    increase: account.balance - before,
                }
            })
            .collect();
        let total_increase = current.total - previous.total;

        Self {
            previous,
            current,
            deltas,
            total_increase,
            is_baseline: false,
        }
    }
}

/// The outcome of one revenue reconciliation run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
    pub message: String,
    pub snapshot: BalanceSnapshot,
    pub increase: Amount,
    pub notification_sent: bool,
    pub deltas: Vec<BalanceDelta>,
}
