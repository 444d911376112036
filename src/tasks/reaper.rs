//! Reaper Task
//!
//! Background task that periodically deletes entries older than the
//! store's `max_age`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the reap loop for `store`.
///
/// The first cycle runs one full `reap_interval` after spawning, then every
/// `reap_interval` after that. Each cycle takes the store lock, reads the
/// clock inside the critical section and removes stale entries, so an add
/// that lands after the scan started is never deleted by that scan.
///
/// The loop ends once `shutdown` carries `true` or its sender is dropped.
///
/// # Arguments
/// * `store` - Shared store guarded by the cache lock
/// * `reap_interval` - Period between reap cycles
/// * `shutdown` - Stop signal for the loop
pub(crate) fn spawn_reaper_task(
    store: Arc<Mutex<CacheStore>>,
    reap_interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(?reap_interval, "Starting cache reaper");

        let mut ticker = time::interval_at(Instant::now() + reap_interval, reap_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard = store.lock().await;
                        guard.reap_stale(Instant::now())
                    };

                    if removed > 0 {
                        info!("Reap cycle: removed {} stale entries", removed);
                    } else {
                        debug!("Reap cycle: no stale entries found");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Cache reaper stopped");
    })
}
