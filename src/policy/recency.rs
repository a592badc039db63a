//! Recency index shared by the LRU and MRU trackers.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

// == Recency Index ==
/// Orders keys by the time of their most recent access.
///
/// Every touch stamps the key with a fresh tick from a monotonic counter.
/// `ticks` maps key -> tick and `order` maps tick -> key, so the oldest and
/// newest keys are the first and last entries of `order`.
#[derive(Debug)]
pub(crate) struct RecencyIndex<K> {
    ticks: HashMap<K, u64>,
    order: BTreeMap<u64, K>,
    clock: u64,
}

impl<K> RecencyIndex<K>
where
    K: Eq + Hash + Clone,
{
    pub(crate) fn new() -> Self {
        Self {
            ticks: HashMap::new(),
            order: BTreeMap::new(),
            clock: 0,
        }
    }

    /// Marks a key as the most recently accessed, tracking it if new.
    pub(crate) fn touch(&mut self, key: &K) {
        self.clock += 1;
        let tick = self.clock;
        if let Some(previous) = self.ticks.insert(key.clone(), tick) {
            self.order.remove(&previous);
        }
        self.order.insert(tick, key.clone());
    }

    pub(crate) fn remove(&mut self, key: &K) {
        if let Some(tick) = self.ticks.remove(key) {
            self.order.remove(&tick);
        }
    }

    /// Least recently accessed key.
    pub(crate) fn oldest(&self) -> Option<&K> {
        self.order.values().next()
    }

    /// Most recently accessed key.
    pub(crate) fn newest(&self) -> Option<&K> {
        self.order.values().next_back()
    }

    pub(crate) fn len(&self) -> usize {
        self.ticks.len()
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.ticks.contains_key(key)
    }
}
