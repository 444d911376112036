//! TTL Cache Module
//!
//! The concurrent handle callers share: one lock around the store and one
//! background reaper per cache.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::tasks::spawn_reaper_task;

// == TTL Cache ==
/// Concurrency-safe byte cache whose entries are deleted by a background
/// reaper once older than `max_age`.
///
/// Expiry is reaper-driven only. A stale entry stays readable until the next
/// reap cycle, so an entry may be served for up to `max_age + reap_interval`
/// after its last add. Reads never extend an entry's age.
///
/// Share it between tasks with `Arc<TtlCache>`. Dropping the cache stops its
/// reaper.
#[derive(Debug)]
pub struct TtlCache {
    /// Store guarded by the single cache lock
    store: Arc<Mutex<CacheStore>>,
    config: CacheConfig,
    /// Stop signal for the reaper
    shutdown_tx: watch::Sender<bool>,
    /// Reaper handle, taken on shutdown
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn new(config: CacheConfig) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new(config.max_age())));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let reaper = spawn_reaper_task(store.clone(), config.reap_interval(), shutdown_rx);

        info!(
            "Cache created: reap_interval={:?}, max_age={:?}",
            config.reap_interval(),
            config.max_age()
        );

        Self {
            store,
            config,
            shutdown_tx,
            reaper: Mutex::new(Some(reaper)),
        }
    }

    // == With Intervals ==
    /// Validates the two durations and creates the cache.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidConfig` if either duration is zero or
    /// `reap_interval` is too large to schedule.
    pub fn with_intervals(reap_interval: Duration, max_age: Duration) -> Result<Self> {
        Ok(Self::new(CacheConfig::new(reap_interval, max_age)?))
    }

    // == Add ==
    /// Inserts or overwrites `key`, resetting its age.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let (key, value) = (key.into(), value.into());
        self.store.lock().await.add(key, value);
    }

    // == Get ==
    /// Returns a copy of the value for `key`, or `None` if it was never
    /// added or has been reaped.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key)
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to finish.
    ///
    /// The cache stays usable for adds and lookups afterwards; nothing is
    /// reaped any more. Calling this twice is a no-op.
    pub async fn shutdown(&self) {
        self.shutdown_tx.send_replace(true);

        let handle = self.reaper.lock().await.take();
        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                warn!("Cache reaper ended abnormally: {}", err);
            }
        }
    }

    // == Is Reaping ==
    /// Returns true while the reaper task is alive.
    pub async fn is_reaping(&self) -> bool {
        self.reaper
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // == Length ==
    /// Returns the number of entries currently held, stale ones included.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    // == Config ==
    /// Returns the timing configuration the cache was created with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}
