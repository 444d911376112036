//! Cache Module
//!
//! In-memory byte cache with age-based expiry performed by a background reaper.

mod entry;
mod stats;
mod store;
mod ttl;


// Re-export public types
pub(crate) use entry::CacheEntry;
pub use stats::CacheStats;
pub(crate) use store::CacheStore;
pub use ttl::TtlCache;
