//! Outbound notification model.
//!
//! A [`Notification`] is transport-agnostic. The Discord sink turns it into
//! an embed; tests inspect it directly.

use std::fmt;

use serde::Serialize;

/// Which webhook a notification is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Game activity announcements.
    Games,
    /// Revenue reconciliation updates.
    Revenue,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Games => "games",
            Channel::Revenue => "revenue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One name/value row in a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl NotificationField {
    /// Build an inline field, the common case.
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }
}

/// What distinguishes a notification from its near-identical siblings.
///
/// Event-driven notifications carry the platform identifier of the thing
/// announced; periodic ones collapse onto a coarse time bucket instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyDiscriminant {
    /// Identity of the announced entity, e.g. a game or round ID.
    Event(String),
    /// Coarse time bucket for recurring notifications.
    TimeBucket(i64),
}

impl fmt::Display for KeyDiscriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyDiscriminant::Event(id) => write!(f, "evt:{id}"),
            KeyDiscriminant::TimeBucket(bucket) => write!(f, "t:{bucket}"),
        }
    }
}

/// Identity of a notification for duplicate suppression.
///
/// Two notifications with equal keys announce the same fact and at most one
/// of them should reach chat within the suppression window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationKey {
    pub channel: Channel,
    pub kind: &'static str,
    pub discriminant: KeyDiscriminant,
}

impl NotificationKey {
    /// Key for an event-driven notification.
    pub fn event(channel: Channel, kind: &'static str, id: impl Into<String>) -> Self {
        Self {
            channel,
            kind,
            discriminant: KeyDiscriminant::Event(id.into()),
        }
    }

    /// Key for a recurring notification grouped by time bucket.
    pub fn time_bucket(channel: Channel, kind: &'static str, bucket: i64) -> Self {
        Self {
            channel,
            kind,
            discriminant: KeyDiscriminant::TimeBucket(bucket),
        }
    }
}

impl fmt::Display for NotificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.channel, self.kind, self.discriminant)
    }
}

/// A fully rendered notification ready for delivery.
#[derive(Debug, Clone)]
pub struct Notification {
    pub channel: Channel,
    pub title: String,
    pub body: String,
    pub color: u32,
    pub fields: Vec<NotificationField>,
    pub key: NotificationKey,
}
