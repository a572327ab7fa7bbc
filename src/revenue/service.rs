//! Revenue reconciliation against the ledger.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::{Amount, BalanceSnapshot, CheckOutcome, CheckReason};
use crate::notify::{render, DispatchOutcome, Dispatcher};
use crate::revenue::tracker::SnapshotTracker;

/// Compares ledger balances against the previous snapshot and announces
/// increases worth reporting.
///
/// A reconciliation run never fails: fetch problems degrade inside the
/// tracker and delivery problems are logged by the dispatcher, so callers
/// always get an outcome describing what happened.
pub struct RevenueService {
    tracker: SnapshotTracker,
    dispatcher: Arc<Dispatcher>,
    notify_threshold: Amount,
}

impl RevenueService {
    pub fn new(
        tracker: SnapshotTracker,
        dispatcher: Arc<Dispatcher>,
        notify_threshold: Amount,
    ) -> Self {
        Self {
            tracker,
            dispatcher,
            notify_threshold,
        }
    }

    /// Refresh balances, and notify when the total increased enough.
    pub async fn check_and_notify(&self, reason: &CheckReason) -> CheckOutcome {
        info!(reason = %reason, "Checking revenue");

        let diff = self.tracker.refresh().await;
        if diff.is_baseline {
            info!(total = %diff.current.total, "First revenue check, storing baseline");
            return CheckOutcome {
                message: "Baseline established".to_string(),
                snapshot: diff.current,
                increase: Amount::ZERO,
                notification_sent: false,
                deltas: Vec::new(),
            };
        }

        info!(
            previous = %diff.previous.total,
            current = %diff.current.total,
            increase = %diff.total_increase,
            "Balance comparison"
        );

        let mut notification_sent = false;
        if diff.total_increase >= self.notify_threshold {
            info!(
                increase = %diff.total_increase,
                "Revenue increased, sending notification"
            );
            if let Some(notification) =
                render::revenue_update(reason, &diff.current, diff.total_increase, Utc::now())
            {
                let outcome = self.dispatcher.dispatch(&notification).await;
                notification_sent = outcome == DispatchOutcome::Delivered;
            }
        } else {
            debug!(
                increase = %diff.total_increase,
                "No significant revenue increase"
            );
        }

        let message = if notification_sent {
            "Revenue increase detected and notification sent"
        } else {
            "No significant revenue change"
        };

        CheckOutcome {
            message: message.to_string(),
            snapshot: diff.current,
            increase: diff.total_increase,
            notification_sent,
            deltas: diff.deltas,
        }
    }

    /// Observe current balances without moving the stored baseline.
    pub async fn current_stats(&self) -> BalanceSnapshot {
        self.tracker.observe().await
    }

    /// The last stored snapshot.
    pub fn last_snapshot(&self) -> BalanceSnapshot {
        self.tracker.last()
    }

    /// Clear the stored baseline; the next check establishes a fresh one.
    pub fn reset(&self) {
        info!("Resetting stored balances");
        self.tracker.reset();
    }
}
