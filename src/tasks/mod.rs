//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: Removes entries older than `max_age` every `reap_interval`

mod reaper;

pub(crate) use reaper::spawn_reaper_task;
