//! Cache Engine Module
//!
//! Main cache engine combining bounded storage with a pluggable eviction
//! policy. This is the only component that mutates both the store and the
//! policy tracker, which keeps their key sets identical.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, info, trace};

use crate::cache::{
    BoundedStore, CacheStats, EvictionEvent, EvictionListener, DEFAULT_MAX_ITEMS,
};
use crate::error::{CacheError, Result};
use crate::policy::{PolicyKind, PolicyTracker};

// == Cache ==
/// Bounded key/value cache with a configurable eviction policy.
pub struct Cache<K, V> {
    /// Key-value storage
    store: BoundedStore<K, V>,
    /// Ordering or frequency state for the chosen policy
    tracker: Box<dyn PolicyTracker<K>>,
    /// Performance statistics
    stats: CacheStats,
    /// Notified once per eviction
    listener: Option<EvictionListener<K>>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
{
    // == Constructor ==
    /// Creates an empty cache using `policy` that holds at most `max_items`
    /// entries.
    ///
    /// # Errors
    /// [`CacheError::InvalidCapacity`] when `max_items` is zero.
    pub fn new(policy: PolicyKind, max_items: usize) -> Result<Self> {
        let store = BoundedStore::new(max_items)?;
        Ok(Self {
            store,
            tracker: policy.tracker(),
            stats: CacheStats::new(policy),
            listener: None,
        })
    }

    // == Default Capacity ==
    /// Creates a cache holding [`DEFAULT_MAX_ITEMS`] entries.
    pub fn with_default_capacity(policy: PolicyKind) -> Self {
        Self::new(policy, DEFAULT_MAX_ITEMS)
            .unwrap_or_else(|_| unreachable!("default capacity is non-zero"))
    }

    // == Listener ==
    /// Registers the callback that receives every eviction event, replacing
    /// any previous one.
    pub fn set_eviction_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&EvictionEvent<K>) + Send + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Builder-style variant of [`Cache::set_eviction_listener`].
    pub fn with_eviction_listener<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&EvictionEvent<K>) + Send + 'static,
    {
        self.set_eviction_listener(listener);
        self
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// `None` for either argument makes the call a no-op. Overwriting an
    /// existing key counts as an access for LRU, MRU and LFU and leaves FIFO
    /// and LIFO order untouched. Inserting a new key into a full cache first
    /// evicts the policy's candidate and notifies the listener.
    pub fn put<Q, W>(&mut self, key: Q, value: W)
    where
        Q: Into<Option<K>>,
        W: Into<Option<V>>,
    {
        let (Some(key), Some(value)) = (key.into(), value.into()) else {
            trace!("Ignoring put with an empty key or value");
            self.stats.record_ignored_put();
            return;
        };

        if self.store.contains(&key) {
            debug!(key = ?key, "Updating existing entry");
            self.stats.record_overwrite();
            self.tracker.on_access(&key);
            self.store.upsert(key, value);
        } else {
            if self.store.is_full() {
                self.evict_one();
            }
            debug!(key = ?key, "Inserting new entry");
            self.tracker.on_insert(&key);
            self.store.upsert(key, value);
        }

        self.stats.set_total_entries(self.store.len());
        debug_assert_eq!(
            self.tracker.len(),
            self.store.len(),
            "store and tracker diverged"
        );
    }

    // == Get ==
    /// Retrieves a value by key, returning `None` when absent.
    ///
    /// A hit counts as an access for LRU, MRU and LFU. A miss changes nothing
    /// but the miss counter.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.store.lookup_entry(key) {
            Some((stored_key, value)) => {
                self.tracker.on_access(stored_key);
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Returns the value for `key` without touching policy state or stats.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.lookup(key)
    }

    // == Contains ==
    /// Returns true if `key` is cached, without touching policy state.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.contains(key)
    }

    // == Evict ==
    /// Removes the policy's candidate from store and tracker and emits the
    /// discard notification.
    fn evict_one(&mut self) {
        let Some(victim) = self.tracker.eviction_candidate().cloned() else {
            panic!(
                "{} tracker has no eviction candidate for a full store of {} entries",
                self.tracker.kind(),
                self.store.len()
            );
        };

        self.tracker.on_evict(&victim);
        let removed = self.store.remove(&victim);
        assert!(
            removed.is_some(),
            "eviction candidate {victim:?} was not in the store"
        );
        self.stats.record_eviction();

        info!(policy = %self.tracker.kind(), key = ?victim, "DISCARD");
        let event = EvictionEvent::discard(victim);
        if let Some(listener) = self.listener.as_mut() {
            listener(&event);
        }
    }

    // == Invariants ==
    /// Verifies that the store is within capacity and that the tracker holds
    /// exactly the store's keys.
    ///
    /// Walks every entry, so it is meant for tests rather than the hot path.
    pub fn check_invariants(&self) -> Result<()> {
        if self.store.len() > self.store.capacity() {
            return Err(CacheError::InvariantViolation(format!(
                "store holds {} entries but capacity is {}",
                self.store.len(),
                self.store.capacity()
            )));
        }
        if self.tracker.len() != self.store.len() {
            return Err(CacheError::InvariantViolation(format!(
                "tracker holds {} keys but store holds {}",
                self.tracker.len(),
                self.store.len()
            )));
        }
        if let Some((key, _)) = self.store.iter().find(|(key, _)| !self.tracker.contains(key)) {
            return Err(CacheError::InvariantViolation(format!(
                "key {key:?} is stored but not tracked"
            )));
        }
        Ok(())
    }

    // == Accessors ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the maximum number of entries the cache holds.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns the eviction policy in use.
    pub fn policy(&self) -> PolicyKind {
        self.tracker.kind()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    /// The key the policy would evict next, if the cache holds anything.
    pub fn eviction_candidate(&self) -> Option<&K> {
        self.tracker.eviction_candidate()
    }

    /// Iterates over the cached entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.store.iter()
    }

    /// Cached keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.store.iter().map(|(key, _)| key)
    }
}

impl<K, V> fmt::Debug for Cache<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("store", &self.store)
            .field("tracker", &self.tracker)
            .field("stats", &self.stats)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
