//! Thread-safe cache handle.
//!
//! One lock guards the store, the policy tracker and the stats together, so
//! no caller can observe a store mutation without the matching tracker update.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{Cache, CacheStats};
use crate::policy::PolicyKind;

// == Shared Cache ==
/// Cloneable handle to a cache shared between threads.
///
/// `get` takes the same exclusive lock as `put` because a hit updates
/// recency or frequency state.
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<Cache<K, V>>>,
}

impl<K, V> SharedCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
{
    // == Constructor ==
    /// Wraps an existing cache.
    pub fn new(cache: Cache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    // == Put ==
    /// Stores a key-value pair under the cache lock; see [`Cache::put`].
    pub fn put<Q, W>(&self, key: Q, value: W)
    where
        Q: Into<Option<K>>,
        W: Into<Option<V>>,
    {
        self.inner.lock().put(key, value);
    }

    // == Get ==
    /// Retrieves a clone of the value for `key`, updating recency or
    /// frequency state under the same lock.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    // == Accessors ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the eviction policy in use.
    pub fn policy(&self) -> PolicyKind {
        self.inner.lock().policy()
    }

    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Runs `f` with exclusive access to the underlying cache.
    pub fn with_cache<R>(&self, f: impl FnOnce(&mut Cache<K, V>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> From<Cache<K, V>> for SharedCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
{
    fn from(cache: Cache<K, V>) -> Self {
        Self::new(cache)
    }
}
