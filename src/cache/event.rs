//! Eviction notification emitted synchronously from `put`.

use std::fmt;

use serde::Serialize;

/// Kind of cache event. Eviction is the only one the cache emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// An entry was evicted
    Discard,
}

// == Eviction Event ==
/// Record handed to the eviction listener, serialized as
/// `{"event":"discard","key":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvictionEvent<K> {
    pub event: EventKind,
    pub key: K,
}

impl<K> EvictionEvent<K> {
    /// Builds the event for a key removed to make room.
    pub fn discard(key: K) -> Self {
        Self {
            event: EventKind::Discard,
            key,
        }
    }
}

impl<K: fmt::Display> fmt::Display for EvictionEvent<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DISCARD: {}", self.key)
    }
}

/// Callback invoked once per eviction.
pub type EvictionListener<K> = Box<dyn FnMut(&EvictionEvent<K>) + Send>;
