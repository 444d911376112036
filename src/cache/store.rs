//! Cache Store Module
//!
//! The unsynchronised mapping behind the cache. Callers serialise access
//! through a single lock (see `TtlCache`).

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key to byte-blob mapping with reaper-driven expiry.
#[derive(Debug)]
pub(crate) struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Activity counters
    stats: CacheStats,
    /// Age beyond which `reap_stale` deletes an entry
    max_age: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose reap cycles drop entries older than `max_age`.
    pub fn new(max_age: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_age,
        }
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`, stamping it with the current time.
    ///
    /// Replacing an entry resets its age.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.insert(key, CacheEntry::new(value));
    }

    /// Inserts a prebuilt entry, replacing any previous one wholesale.
    pub(crate) fn insert(&mut self, key: String, entry: CacheEntry) {
        debug!(key = %key, bytes = entry.value.len(), "cache add");
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Does not look at timestamps: an entry past `max_age` stays visible
    /// until a reap cycle removes it.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                trace!(key, "cache hit");
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                trace!(key, "cache miss");
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap Stale ==
    /// Deletes every entry older than `max_age` as of `now`.
    ///
    /// Returns the number of entries removed.
    pub(crate) fn reap_stale(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let max_age = self.max_age;
        self.entries.retain(|_, entry| !entry.is_stale(now, max_age));

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const MAX_AGE: Duration = Duration::from_secs(5);

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(MAX_AGE);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_add_and_get() {
        let mut store = CacheStore::new(MAX_AGE);

        store.add("key1".to_string(), b"value1".to_vec());

        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new(MAX_AGE);
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_empty_value_is_found() {
        let mut store = CacheStore::new(MAX_AGE);

        store.add("empty".to_string(), Vec::new());

        assert_eq!(store.get("empty"), Some(Vec::new()));
    }

    #[test]
    fn test_store_overwrite_resets_age() {
        let mut store = CacheStore::new(MAX_AGE);
        let t0 = Instant::now();

        store.insert("key1".to_string(), CacheEntry::created_at(b"old".to_vec(), t0));
        store.insert(
            "key1".to_string(),
            CacheEntry::created_at(b"new".to_vec(), t0 + Duration::from_secs(4)),
        );

        // The first write would be stale by now, the second is not.
        assert_eq!(store.reap_stale(t0 + Duration::from_secs(6)), 0);
        assert_eq!(store.get("key1"), Some(b"new".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_ignores_age() {
        let mut store = CacheStore::new(Duration::from_millis(1));

        store.add("old".to_string(), b"v".to_vec());
        std::thread::sleep(Duration::from_millis(10));

        assert_eq!(store.get("old"), Some(b"v".to_vec()));
    }

    #[test]
    fn test_store_reap_removes_only_stale() {
        let mut store = CacheStore::new(MAX_AGE);
        let t0 = Instant::now();

        store.insert("a".to_string(), CacheEntry::created_at(b"1".to_vec(), t0));
        store.insert(
            "b".to_string(),
            CacheEntry::created_at(b"2".to_vec(), t0 + Duration::from_secs(3)),
        );

        let removed = store.reap_stale(t0 + Duration::from_secs(6));

        assert_eq!(removed, 1);
        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), Some(b"2".to_vec()));
    }

    #[test]
    fn test_store_reap_before_max_age_keeps_all() {
        let mut store = CacheStore::new(MAX_AGE);
        let t0 = Instant::now();

        store.insert("a".to_string(), CacheEntry::created_at(b"1".to_vec(), t0));
        store.insert("b".to_string(), CacheEntry::created_at(b"2".to_vec(), t0));

        assert_eq!(store.reap_stale(t0 + Duration::from_secs(1)), 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(MAX_AGE);
        let t0 = Instant::now();

        store.insert("key1".to_string(), CacheEntry::created_at(b"v".to_vec(), t0));
        store.insert("key2".to_string(), CacheEntry::created_at(b"v".to_vec(), t0));
        store.get("key1"); // hit
        store.get("nonexistent"); // miss
        store.reap_stale(t0 + Duration::from_secs(10));

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.reaped, 2);
        assert_eq!(stats.total_entries, 0);
    }
}
