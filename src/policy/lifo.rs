//! LIFO Tracker Module
//!
//! Evicts the key that was inserted most recently.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use super::{PolicyKind, PolicyTracker};

// == LIFO Tracker ==
/// Tracks insertion order as a stack.
///
/// The top of the stack is the last successful insertion, which is the next
/// victim. Reads and overwrites do not move keys. `members` mirrors the
/// stack for constant-time membership checks.
#[derive(Debug)]
pub struct LifoTracker<K> {
    stack: Vec<K>,
    members: HashSet<K>,
}

impl<K> LifoTracker<K> {
    // == Constructor ==
    /// Creates a new empty LIFO tracker.
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            members: HashSet::new(),
        }
    }
}

impl<K> Default for LifoTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PolicyTracker<K> for LifoTracker<K>
where
    K: Eq + Hash + Clone + fmt::Debug + Send,
{
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lifo
    }

    fn on_insert(&mut self, key: &K) {
        if self.members.insert(key.clone()) {
            self.stack.push(key.clone());
        }
    }

    fn eviction_candidate(&self) -> Option<&K> {
        self.stack.last()
    }

    fn on_evict(&mut self, key: &K) {
        if !self.members.remove(key) {
            return;
        }
        if self.stack.last() == Some(key) {
            self.stack.pop();
        } else {
            self.stack.retain(|k| k != key);
        }
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.members.contains(key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_candidate_is_last_inserted() {
        let mut lifo = LifoTracker::new();
        lifo.on_insert(&"a");
        lifo.on_insert(&"b");
        lifo.on_insert(&"c");

        assert_eq!(lifo.eviction_candidate(), Some(&"c"));
    }

    #[test]
    fn test_lifo_access_does_not_reorder() {
        let mut lifo = LifoTracker::new();
        lifo.on_insert(&"a");
        lifo.on_insert(&"b");
        lifo.on_access(&"a");

        assert_eq!(lifo.eviction_candidate(), Some(&"b"));
    }

    #[test]
    fn test_lifo_evict_exposes_previous_insert() {
        let mut lifo = LifoTracker::new();
        lifo.on_insert(&"a");
        lifo.on_insert(&"b");

        lifo.on_evict(&"b");
        assert_eq!(lifo.eviction_candidate(), Some(&"a"));

        // The replacement becomes the new top of the stack
        lifo.on_insert(&"c");
        assert_eq!(lifo.eviction_candidate(), Some(&"c"));
        assert_eq!(lifo.len(), 2);
    }

    #[test]
    fn test_lifo_empty() {
        let lifo: LifoTracker<String> = LifoTracker::new();
        assert_eq!(lifo.eviction_candidate(), None);
        assert!(lifo.is_empty());
    }
}
