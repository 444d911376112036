//! Pokecache - a time-bounded in-memory byte cache
//!
//! Stores opaque byte blobs under string keys (typically request URLs) so
//! that repeated network calls can be skipped. Entries are deleted by a
//! background reaper once they are older than the configured `max_age`.
//!
//! ```ignore
//! let cache = TtlCache::with_intervals(Duration::from_secs(5), Duration::from_secs(5))?;
//! cache.add(url, body).await;
//! if let Some(body) = cache.get(url).await { /* skip the request */ }
//! ```
//!
//! Reaping is internal to the cache. Neither the store nor the reaper can be
//! reached from outside the crate:
//!
//! ```compile_fail
//! use pokecache::cache::CacheStore;
//! ```
//!
//! ```compile_fail
//! use pokecache::tasks::spawn_reaper_task;
//! ```

pub mod cache;
pub mod config;
pub mod error;
mod tasks;

pub use cache::{CacheStats, TtlCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
