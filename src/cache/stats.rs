//! Cache Statistics Module
//!
//! Counts how the cache's lookups and writes resolved under its policy.

use serde::Serialize;

use crate::policy::PolicyKind;

// == Cache Stats ==
/// Per-cache counters, tagged with the policy that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Eviction policy of the cache these counters belong to
    pub policy: PolicyKind,
    /// Lookups that found their key
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    /// Entries discarded to stay within capacity
    pub evictions: u64,
    /// Puts that replaced the value of a key already cached
    pub overwrites: u64,
    /// Puts dropped because the key or the value was empty
    pub ignored_puts: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates zeroed counters for a cache using `policy`.
    pub fn new(policy: PolicyKind) -> Self {
        Self {
            policy,
            hits: 0,
            misses: 0,
            evictions: 0,
            overwrites: 0,
            ignored_puts: 0,
            total_entries: 0,
        }
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }

    // == Inserts ==
    /// Returns how many puts stored a key that was not cached yet.
    ///
    /// Every accepted put is either an insert or an overwrite, and every
    /// eviction made room for one insert.
    pub fn inserts(&self) -> u64 {
        self.total_entries as u64 + self.evictions
    }

    // == Recorders ==
    /// Counts a lookup that found its key.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Counts a lookup that found nothing.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Counts one discarded entry.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Counts a put that replaced an existing value.
    pub fn record_overwrite(&mut self) {
        self.overwrites += 1;
    }

    /// Counts a put dropped for an empty key or value.
    pub fn record_ignored_put(&mut self) {
        self.ignored_puts += 1;
    }

    /// Refreshes the entry count after a put.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
