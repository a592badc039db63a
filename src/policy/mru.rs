//! MRU Tracker Module
//!
//! Evicts the key that was accessed most recently. A key that was just read
//! is the first to go when a different key is inserted into a full cache.

use std::fmt;
use std::hash::Hash;

use super::recency::RecencyIndex;
use super::{PolicyKind, PolicyTracker};

// == MRU Tracker ==
/// Tracks access order for MRU eviction; the inverse of [`super::LruTracker`].
#[derive(Debug)]
pub struct MruTracker<K> {
    recency: RecencyIndex<K>,
}

impl<K> MruTracker<K>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new empty MRU tracker.
    pub fn new() -> Self {
        Self {
            recency: RecencyIndex::new(),
        }
    }
}

impl<K> Default for MruTracker<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PolicyTracker<K> for MruTracker<K>
where
    K: Eq + Hash + Clone + fmt::Debug + Send,
{
    fn kind(&self) -> PolicyKind {
        PolicyKind::Mru
    }

    fn on_insert(&mut self, key: &K) {
        self.recency.touch(key);
    }

    fn on_access(&mut self, key: &K) {
        self.recency.touch(key);
    }

    fn eviction_candidate(&self) -> Option<&K> {
        self.recency.newest()
    }

    fn on_evict(&mut self, key: &K) {
        self.recency.remove(key);
    }

    fn len(&self) -> usize {
        self.recency.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.recency.contains(key)
    }
}
