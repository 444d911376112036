//! Cache Entry Module
//!
//! Defines a single cached blob together with its insertion time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached byte sequence and the instant it was added.
///
/// Entries are never mutated; a repeated add replaces the whole entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CacheEntry {
    /// The stored bytes
    pub(crate) value: Vec<u8>,
    /// Time of the latest add for this key
    pub(crate) created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current (tokio) time.
    pub fn new(value: Vec<u8>) -> Self {
        Self::created_at(value, Instant::now())
    }

    // == Created At ==
    /// Creates an entry with an explicit creation instant.
    pub(crate) fn created_at(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns the elapsed time between creation and `now`.
    ///
    /// Saturates to zero if `now` precedes the creation instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry is older than `max_age` at `now`.
    ///
    /// An entry exactly `max_age` old is not yet stale.
    pub fn is_stale(&self, now: Instant, max_age: Duration) -> bool {
        self.age(now) > max_age
    }
}
