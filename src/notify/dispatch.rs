//! Notification dispatch with duplicate suppression.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::Notification;
use crate::notify::dedup::NotificationDeduplicator;
use crate::notify::sink::{Delivery, NotificationSink};

/// What the dispatcher did with a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Sent to the destination.
    Delivered,
    /// A duplicate arrived within the suppression window and was dropped.
    Suppressed,
    /// No destination was configured for the channel.
    Skipped,
    /// Delivery was attempted and failed.
    Failed,
}

impl DispatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchOutcome::Delivered => "delivered",
            DispatchOutcome::Suppressed => "suppressed",
            DispatchOutcome::Skipped => "skipped",
            DispatchOutcome::Failed => "failed",
        }
    }

    /// Whether delivery was attempted and failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, DispatchOutcome::Failed)
    }
}

/// Routes notifications through duplicate suppression to the sink.
///
/// The dedup entry is recorded before delivery so racing duplicates cannot
/// both pass, and rolled back when delivery fails or is skipped so a later
/// retry is not locked out by a send that never happened.
pub struct Dispatcher {
    sink: Arc<dyn NotificationSink>,
    dedup: Arc<NotificationDeduplicator>,
}

impl Dispatcher {
    pub fn new(sink: Arc<dyn NotificationSink>, dedup: Arc<NotificationDeduplicator>) -> Self {
        Self { sink, dedup }
    }

    /// Dispatch a notification, reporting what happened to it.
    pub async fn dispatch(&self, notification: &Notification) -> DispatchOutcome {
        let key = &notification.key;

        if self.dedup.should_suppress(key) {
            info!(key = %key, "Duplicate notification suppressed");
            return DispatchOutcome::Suppressed;
        }

        match self.sink.deliver(notification).await {
            Ok(Delivery::Sent) => {
                info!(
                    channel = %notification.channel,
                    title = %notification.title,
                    sink = self.sink.name(),
                    "Notification sent"
                );
                DispatchOutcome::Delivered
            }
            Ok(Delivery::Skipped) => {
                self.dedup.mark_failed(key);
                DispatchOutcome::Skipped
            }
            Err(e) => {
                self.dedup.mark_failed(key);
                error!(
                    key = %key,
                    sink = self.sink.name(),
                    error = %e,
                    "Failed to send notification"
                );
                DispatchOutcome::Failed
            }
        }
    }
}
