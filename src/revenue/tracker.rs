//! Balance snapshot tracking against the ledger.

use std::sync::Arc;

use chrono::Utc;
use futures_util::future::join_all;
use parking_lot::Mutex;
use tracing::warn;

use crate::domain::{AccountBalance, AccountId, Amount, BalanceSnapshot, SnapshotDiff};
use crate::ledger::BalanceSource;

/// A labelled ledger account whose balance counts toward revenue.
#[derive(Debug, Clone)]
pub struct WatchedAccount {
    pub label: String,
    pub account: AccountId,
}

impl WatchedAccount {
    pub fn new(label: impl Into<String>, account: AccountId) -> Self {
        Self {
            label: label.into(),
            account,
        }
    }
}

/// Holds the last observed snapshot and produces diffs on refresh.
///
/// Individual balance fetches degrade to zero with a warning rather than
/// failing the whole observation; a flaky mirror node should delay revenue
/// reporting, not break event notifications.
pub struct SnapshotTracker {
    source: Arc<dyn BalanceSource>,
    accounts: Vec<WatchedAccount>,
    current: Mutex<BalanceSnapshot>,
}

impl SnapshotTracker {
    pub fn new(source: Arc<dyn BalanceSource>, accounts: Vec<WatchedAccount>) -> Self {
        let current = Mutex::new(Self::zeroed(&accounts));
        Self {
            source,
            accounts,
            current,
        }
    }

    fn zeroed(accounts: &[WatchedAccount]) -> BalanceSnapshot {
        let balances = accounts
            .iter()
            .map(|w| AccountBalance {
                label: w.label.clone(),
                account: w.account.clone(),
                balance: Amount::ZERO,
            })
            .collect();
        BalanceSnapshot::new(balances, None)
    }

    /// Observe current balances without touching the stored snapshot.
    pub async fn observe(&self) -> BalanceSnapshot {
        let fetches = self.accounts.iter().map(|watched| async {
            match self.source.fetch_balance(&watched.account).await {
                Ok(balance) => balance,
                Err(e) => {
                    warn!(
                        label = %watched.label,
                        account = %watched.account,
                        error = %e,
                        "Balance fetch failed, treating as zero"
                    );
                    Amount::ZERO
                }
            }
        });

        let balances = join_all(fetches)
            .await
            .into_iter()
            .zip(&self.accounts)
            .map(|(balance, watched)| AccountBalance {
                label: watched.label.clone(),
                account: watched.account.clone(),
                balance,
            })
            .collect();

        BalanceSnapshot::new(balances, Some(Utc::now()))
    }

    /// Observe the ledger and replace the stored snapshot in one step.
    ///
    /// The swap is atomic under the lock, so two concurrent refreshes each
    /// diff against a distinct predecessor and an increase is never counted
    /// twice.
    pub async fn refresh(&self) -> SnapshotDiff {
        let next = self.observe().await;
        let previous = {
            let mut current = self.current.lock();
            std::mem::replace(&mut *current, next.clone())
        };
        SnapshotDiff::between(previous, next)
    }

    /// The last stored snapshot.
    pub fn last(&self) -> BalanceSnapshot {
        self.current.lock().clone()
    }

    /// Discard the stored snapshot so the next refresh starts a new baseline.
    pub fn reset(&self) {
        *self.current.lock() = Self::zeroed(&self.accounts);
    }
}
