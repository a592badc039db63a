//! Bounded Store Module
//!
//! Key/value storage with a fixed maximum item count. The store never picks
//! victims itself; callers consult a policy tracker before it overflows.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::CacheEntry;
use crate::error::{CacheError, Result};

// == Bounded Store ==
/// Primary key/value map capped at `max_items` entries.
#[derive(Debug)]
pub struct BoundedStore<K, V> {
    /// Key-value storage
    data: HashMap<K, V>,
    /// Maximum number of entries allowed
    max_items: usize,
}

impl<K, V> BoundedStore<K, V>
where
    K: Eq + Hash,
{
    // == Constructor ==
    /// Creates an empty store holding at most `max_items` entries.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] when `max_items` is zero.
    pub fn new(max_items: usize) -> Result<Self> {
        if max_items == 0 {
            return Err(CacheError::InvalidCapacity(max_items));
        }

        Ok(Self {
            data: HashMap::with_capacity(max_items),
            max_items,
        })
    }

    // == Upsert ==
    /// Inserts or replaces the value for `key`, returning the previous value.
    pub fn upsert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.data.insert(key, value);
        debug_assert!(
            self.data.len() <= self.max_items,
            "store grew past its capacity of {}",
            self.max_items
        );
        previous
    }

    // == Lookup ==
    /// Returns the value stored for `key`.
    pub fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.get(key)
    }

    /// Returns the stored key together with its value.
    pub fn lookup_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.get_key_value(key)
    }

    // == Remove ==
    /// Removes `key`, returning the entry that was stored.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<CacheEntry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.remove_entry(key).map(CacheEntry::from)
    }

    // == Contains ==
    /// Returns true if `key` is stored.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.contains_key(key)
    }

    // == Size ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true when one more new key would exceed the capacity.
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.max_items
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.max_items
    }

    /// Iterates over the stored entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.data.iter()
    }
}
