//! LFU Tracker Module
//!
//! Evicts the key with the lowest access count. Ties go to the key that was
//! registered earliest, regardless of when the tied keys were last read.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

use super::{PolicyKind, PolicyTracker};

/// Eviction rank: access count first, then registration sequence.
type Rank = (u64, u64);

// == LFU Tracker ==
/// Tracks per-key access frequency for LFU eviction.
///
/// `ranks` holds each key's `(frequency, sequence)` and `by_rank` orders
/// keys by that pair, so the first entry of `by_rank` is the victim.
#[derive(Debug)]
pub struct LfuTracker<K> {
    ranks: HashMap<K, Rank>,
    by_rank: BTreeMap<Rank, K>,
    next_seq: u64,
}

impl<K> LfuTracker<K>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new empty LFU tracker.
    pub fn new() -> Self {
        Self {
            ranks: HashMap::new(),
            by_rank: BTreeMap::new(),
            next_seq: 0,
        }
    }

    // == Frequency ==
    /// Access count for a tracked key.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.ranks.get(key).map(|&(freq, _)| freq)
    }
}

impl<K> Default for LfuTracker<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PolicyTracker<K> for LfuTracker<K>
where
    K: Eq + Hash + Clone + fmt::Debug + Send,
{
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lfu
    }

    fn on_insert(&mut self, key: &K) {
        let rank = (1, self.next_seq);
        self.next_seq += 1;
        if let Some(stale) = self.ranks.insert(key.clone(), rank) {
            self.by_rank.remove(&stale);
        }
        self.by_rank.insert(rank, key.clone());
    }

    fn on_access(&mut self, key: &K) {
        let Some(rank) = self.ranks.get_mut(key) else {
            return;
        };
        self.by_rank.remove(&*rank);
        rank.0 += 1;
        self.by_rank.insert(*rank, key.clone());
    }

    fn eviction_candidate(&self) -> Option<&K> {
        self.by_rank.values().next()
    }

    fn on_evict(&mut self, key: &K) {
        if let Some(rank) = self.ranks.remove(key) {
            self.by_rank.remove(&rank);
        }
    }

    fn len(&self) -> usize {
        self.ranks.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.ranks.contains_key(key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lfu_insert_starts_at_one() {
        let mut lfu = LfuTracker::new();
        lfu.on_insert(&"a");

        assert_eq!(lfu.frequency(&"a"), Some(1));
        assert_eq!(lfu.frequency(&"b"), None);
    }

    #[test]
    fn test_lfu_access_increments() {
        let mut lfu = LfuTracker::new();
        lfu.on_insert(&"a");
        lfu.on_access(&"a");
        lfu.on_access(&"a");

        assert_eq!(lfu.frequency(&"a"), Some(3));
    }

    #[test]
    fn test_lfu_access_untracked_is_noop() {
        let mut lfu = LfuTracker::new();
        lfu.on_access(&"ghost");

        assert!(lfu.is_empty());
        assert_eq!(lfu.eviction_candidate(), None);
    }

    #[test]
    fn test_lfu_candidate_is_least_frequent() {
        let mut lfu = LfuTracker::new();
        lfu.on_insert(&"a");
        lfu.on_insert(&"b");
        lfu.on_access(&"a");

        assert_eq!(lfu.eviction_candidate(), Some(&"b"));
    }

    #[test]
    fn test_lfu_tie_goes_to_earliest_registration() {
        let mut lfu = LfuTracker::new();
        lfu.on_insert(&"a");
        lfu.on_insert(&"b");
        lfu.on_insert(&"c");

        // b is read after a and c, but all three share the minimum frequency
        // once a and c catch up.
        lfu.on_access(&"b");
        lfu.on_access(&"c");
        lfu.on_access(&"a");

        assert_eq!(lfu.eviction_candidate(), Some(&"a"));
    }

    #[test]
    fn test_lfu_reinserted_key_registers_last() {
        let mut lfu = LfuTracker::new();
        lfu.on_insert(&"a");
        lfu.on_insert(&"b");

        lfu.on_evict(&"a");
        lfu.on_insert(&"a");

        assert_eq!(lfu.eviction_candidate(), Some(&"b"));
        assert_eq!(lfu.len(), 2);
    }

    #[test]
    fn test_lfu_evict_removes_rank() {
        let mut lfu = LfuTracker::new();
        lfu.on_insert(&"a");
        lfu.on_evict(&"a");

        assert!(!lfu.contains(&"a"));
        assert!(lfu.by_rank.is_empty());
    }
}
