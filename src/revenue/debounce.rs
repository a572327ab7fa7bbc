//! Debounced scheduling of revenue reconciliations.
//!
//! Every settled game asks for a revenue check, but a burst of settlements
//! should produce one check, not one per game. Requests are keyed by reason
//! and a coarse time bucket; a request whose key is already pending is
//! coalesced into the scheduled run.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::domain::CheckReason;
use crate::revenue::service::RevenueService;

/// Schedules delayed revenue checks, coalescing duplicates.
pub struct ReconciliationDebouncer {
    service: Arc<RevenueService>,
    pending: Arc<Mutex<HashSet<String>>>,
    bucket: Duration,
}

impl ReconciliationDebouncer {
    pub fn new(service: Arc<RevenueService>, bucket: Duration) -> Self {
        Self {
            service,
            pending: Arc::new(Mutex::new(HashSet::new())),
            bucket,
        }
    }

    /// Request a reconciliation for `reason` after `delay`.
    ///
    /// Returns `true` when a run was scheduled and `false` when an
    /// equivalent request was already pending. The pending entry is removed
    /// once the run finishes, whatever its outcome, so the next bucket can
    /// always schedule again.
    pub fn trigger(&self, reason: CheckReason, delay: Duration) -> bool {
        let key = pending_key(&reason, self.bucket, Utc::now());

        if !self.pending.lock().insert(key.clone()) {
            debug!(reason = %reason, "Revenue check already scheduled, skipping duplicate");
            return false;
        }

        info!(
            reason = %reason,
            delay_ms = delay.as_millis() as u64,
            "Scheduled revenue check"
        );

        let service = Arc::clone(&self.service);
        let pending = Arc::clone(&self.pending);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let outcome = service.check_and_notify(&reason).await;
            info!(
                reason = %reason,
                increase = %outcome.increase,
                notification_sent = outcome.notification_sent,
                "Scheduled revenue check finished"
            );
            pending.lock().remove(&key);
        });

        true
    }

    /// Number of checks currently scheduled and not yet finished.
    pub fn pending_len(&self) -> usize {
        self.pending.lock().len()
    }
}

fn pending_key(reason: &CheckReason, bucket: Duration, now: DateTime<Utc>) -> String {
    let bucket_secs = bucket.as_secs().max(1) as i64;
    format!("{}-{}", reason, now.timestamp() / bucket_secs)
}
