//! Duplicate suppression for outbound notifications.
//!
//! Game backends occasionally emit the same event twice (retries, redundant
//! workers). Keying each notification and remembering recent deliveries for
//! a short window keeps the chat free of double announcements.

use std::time::{Duration, Instant};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::NotificationKey;

const DEFAULT_MAX_ENTRIES: usize = 1024;

/// Thread-safe notification deduplicator.
///
/// Uses a concurrent hash map of notification keys to delivery times. The
/// check-and-record step is atomic per key, so two racing dispatches of the
/// same notification can never both pass.
pub struct NotificationDeduplicator {
    /// Recently recorded keys with the time they were recorded.
    cache: DashMap<NotificationKey, Instant>,
    /// How long a recorded key suppresses duplicates.
    window: Duration,
    /// Maximum number of entries in the cache.
    max_entries: usize,
}

impl NotificationDeduplicator {
    /// Create a deduplicator with the given suppression window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self::with_max_entries(window, DEFAULT_MAX_ENTRIES)
    }

    /// Create a deduplicator with an explicit cache capacity.
    #[must_use]
    pub fn with_max_entries(window: Duration, max_entries: usize) -> Self {
        Self {
            cache: DashMap::new(),
            window,
            max_entries,
        }
    }

    /// Check whether `key` was recorded within the window; record it if not.
    ///
    /// Returns `true` when the notification is a duplicate and must not be
    /// sent. Returns `false` after recording the key, reserving the send for
    /// this caller.
    pub fn should_suppress(&self, key: &NotificationKey) -> bool {
        let now = Instant::now();

        let suppressed = match self.cache.entry(key.clone()) {
            Entry::Occupied(mut occupied) => {
                if now.duration_since(*occupied.get()) < self.window {
                    true
                } else {
                    // Expired entry, refresh it and allow the send
                    occupied.insert(now);
                    false
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(now);
                false
            }
        };

        if !suppressed && self.cache.len() > self.max_entries {
            self.gc();
        }

        suppressed
    }

    /// Forget a recorded key after a failed or skipped delivery.
    ///
    /// Without this, a failed send would block the retry that follows it.
    pub fn mark_failed(&self, key: &NotificationKey) {
        self.cache.remove(key);
    }

    /// Remove expired entries, then oldest entries while over capacity.
    fn gc(&self) {
        let now = Instant::now();
        let window = self.window;

        self.cache
            .retain(|_, recorded| now.duration_since(*recorded) < window);

        if self.cache.len() > self.max_entries {
            let mut entries: Vec<(NotificationKey, Instant)> = self
                .cache
                .iter()
                .map(|entry| (entry.key().clone(), *entry.value()))
                .collect();
            entries.sort_by(|a, b| a.1.cmp(&b.1));

            let to_remove = entries.len().saturating_sub(self.max_entries);
            for (key, _) in entries.into_iter().take(to_remove) {
                self.cache.remove(&key);
            }
        }
    }

    /// Number of keys currently tracked.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
