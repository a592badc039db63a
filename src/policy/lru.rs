//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::fmt;
use std::hash::Hash;

use super::recency::RecencyIndex;
use super::{PolicyKind, PolicyTracker};

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Inserts, reads and overwrites all count as accesses. The victim is always
/// the key touched longest ago.
#[derive(Debug)]
pub struct LruTracker<K> {
    /// Order of keys by access time
    recency: RecencyIndex<K>,
}

impl<K> LruTracker<K>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            recency: RecencyIndex::new(),
        }
    }
}

impl<K> Default for LruTracker<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PolicyTracker<K> for LruTracker<K>
where
    K: Eq + Hash + Clone + fmt::Debug + Send,
{
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn on_insert(&mut self, key: &K) {
        self.recency.touch(key);
    }

    // == Touch ==
    fn on_access(&mut self, key: &K) {
        self.recency.touch(key);
    }

    fn eviction_candidate(&self) -> Option<&K> {
        self.recency.oldest()
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

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn evict(lru: &mut LruTracker<&'static str>) -> Option<&'static str> {
        let victim = *lru.eviction_candidate()?;
        lru.on_evict(&victim);
        Some(victim)
    }

    #[test]
    fn test_lru_new() {
        let lru: LruTracker<&str> = LruTracker::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
    }

    #[test]
    fn test_lru_insert_new_keys() {
        let mut lru = LruTracker::new();

        lru.on_insert(&"key1");
        lru.on_insert(&"key2");
        lru.on_insert(&"key3");

        assert_eq!(lru.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(lru.eviction_candidate(), Some(&"key1"));
    }

    #[test]
    fn test_lru_access_existing_key() {
        let mut lru = LruTracker::new();

        lru.on_insert(&"key1");
        lru.on_insert(&"key2");
        lru.on_insert(&"key3");

        lru.on_access(&"key1");

        assert_eq!(lru.len(), 3);
        // key2 is now oldest
        assert_eq!(lru.eviction_candidate(), Some(&"key2"));
    }

    #[test]
    fn test_lru_evict_in_order() {
        let mut lru = LruTracker::new();

        lru.on_insert(&"key1");
        lru.on_insert(&"key2");
        lru.on_insert(&"key3");

        assert_eq!(evict(&mut lru), Some("key1"));
        assert_eq!(lru.len(), 2);
        assert_eq!(evict(&mut lru), Some("key2"));
        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_lru_evict_empty() {
        let mut lru = LruTracker::new();
        assert_eq!(evict(&mut lru), None);
    }

    #[test]
    fn test_lru_order_after_multiple_touches() {
        let mut lru = LruTracker::new();

        lru.on_insert(&"a");
        lru.on_insert(&"b");
        lru.on_insert(&"c");

        lru.on_access(&"a");
        lru.on_access(&"c");
        lru.on_access(&"b");

        // Oldest to newest: a, c, b
        assert_eq!(evict(&mut lru), Some("a"));
        assert_eq!(evict(&mut lru), Some("c"));
        assert_eq!(evict(&mut lru), Some("b"));
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_access_same_key_multiple_times() {
        let mut lru = LruTracker::new();

        lru.on_insert(&"key1");
        lru.on_access(&"key1");
        lru.on_access(&"key1");

        // Should only have one entry
        assert_eq!(lru.len(), 1);
        assert_eq!(evict(&mut lru), Some("key1"));
        assert!(lru.is_empty());
    }
}
