//! Notification pipeline: rendering, duplicate suppression, delivery.

mod dedup;
mod discord;
mod dispatch;
pub mod render;
mod sink;

pub use dedup::NotificationDeduplicator;
pub use discord::DiscordSink;
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use sink::{Delivery, NotificationSink};
