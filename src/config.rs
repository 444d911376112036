//! Configuration Module
//!
//! Holds the two independent timing knobs of the cache: how often the reaper
//! runs and how old an entry may get before a reap cycle removes it.

use std::time::Duration;

use tokio::time::Instant;

use crate::error::{CacheError, Result};

/// Cache timing configuration.
///
/// Both durations are strictly positive and only obtainable through
/// `CacheConfig::new`. There is deliberately no `Default`: both values have
/// to be chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Time between two reap cycles
    reap_interval: Duration,
    /// Age beyond which a reap cycle deletes an entry
    max_age: Duration,
}

impl CacheConfig {
    // == Constructor ==
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidConfig` if either duration is zero, or if
    /// `reap_interval` is too large to schedule a reap cycle.
    pub fn new(reap_interval: Duration, max_age: Duration) -> Result<Self> {
        if reap_interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "reap_interval must be positive".to_string(),
            ));
        }
        if Instant::now().checked_add(reap_interval).is_none() {
            return Err(CacheError::InvalidConfig(format!(
                "reap_interval {:?} is too large to schedule",
                reap_interval
            )));
        }
        if max_age.is_zero() {
            return Err(CacheError::InvalidConfig(
                "max_age must be positive".to_string(),
            ));
        }

        Ok(Self {
            reap_interval,
            max_age,
        })
    }

    // == Reap Interval ==
    /// Returns the time between two reap cycles.
    pub fn reap_interval(&self) -> Duration {
        self.reap_interval
    }

    // == Max Age ==
    /// Returns the age beyond which a reap cycle deletes an entry.
    pub fn max_age(&self) -> Duration {
        self.max_age
    }
}
