//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::fmt;
use std::hash::Hash;

use crate::cache::{Cache, DEFAULT_MAX_ITEMS};
use crate::error::Result;
use crate::policy::PolicyKind;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Eviction policy applied when the cache is full
    pub policy: PolicyKind,
    /// Maximum number of entries the cache can hold
    pub max_items: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_POLICY` - One of fifo, lifo, lru, mru, lfu (default: lru)
    /// - `CACHE_MAX_ITEMS` - Maximum cache entries (default: 4)
    ///
    /// Unparsable values fall back to the defaults. A capacity of zero is
    /// kept as-is and rejected by [`Config::build_cache`].
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            policy: env::var("CACHE_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.policy),
            max_items: env::var("CACHE_MAX_ITEMS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_items),
        }
    }

    /// Builds an empty cache from this configuration.
    pub fn build_cache<K, V>(&self) -> Result<Cache<K, V>>
    where
        K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
    {
        Cache::new(self.policy, self.max_items)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Lru,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}
