//! Delivery seam for rendered notifications.

use async_trait::async_trait;

use crate::domain::Notification;
use crate::error::Result;

/// What happened to a notification handed to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The notification reached the destination.
    Sent,
    /// The sink had nowhere to send it (e.g. webhook not configured).
    Skipped,
}

/// A destination for notifications.
///
/// The production implementation posts Discord webhooks; tests substitute
/// a recording double.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver a notification, reporting whether it was actually sent.
    async fn deliver(&self, notification: &Notification) -> Result<Delivery>;

    /// Short name of the sink for logging.
    fn name(&self) -> &'static str;
}
