//! FIFO Tracker Module
//!
//! Evicts the key that was inserted earliest.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

use super::{PolicyKind, PolicyTracker};

// == FIFO Tracker ==
/// Tracks insertion order for FIFO eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Inserted earliest (next victim)
/// - Back = Inserted most recently
///
/// `members` mirrors the queue so membership checks do not scan it.
#[derive(Debug)]
pub struct FifoTracker<K> {
    queue: VecDeque<K>,
    members: HashSet<K>,
}

impl<K> FifoTracker<K> {
    // == Constructor ==
    /// Creates a new empty FIFO tracker.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            members: HashSet::new(),
        }
    }
}

impl<K> Default for FifoTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PolicyTracker<K> for FifoTracker<K>
where
    K: Eq + Hash + Clone + fmt::Debug + Send,
{
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn on_insert(&mut self, key: &K) {
        if self.members.insert(key.clone()) {
            self.queue.push_back(key.clone());
        }
    }

    fn eviction_candidate(&self) -> Option<&K> {
        self.queue.front()
    }

    fn on_evict(&mut self, key: &K) {
        if !self.members.remove(key) {
            return;
        }
        // Victims come from the front; anything else is a linear removal.
        if self.queue.front() == Some(key) {
            self.queue.pop_front();
        } else {
            self.queue.retain(|k| k != key);
        }
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.members.contains(key)
    }
}
