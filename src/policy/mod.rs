//! Eviction Policy Module
//!
//! Each policy owns the ordering or frequency metadata needed to pick a
//! victim. Trackers are linked to the store only by key; they never hold
//! values.

mod fifo;
mod lfu;
mod lifo;
mod lru;
mod mru;
mod recency;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CacheError;

pub use fifo::FifoTracker;
pub use lfu::LfuTracker;
pub use lifo::LifoTracker;
pub use lru::LruTracker;
pub use mru::MruTracker;

// == Policy Tracker ==
/// Auxiliary state that decides which key to evict when the store is full.
///
/// The cache facade is the only caller. It guarantees that `on_insert` is only
/// called for keys not yet tracked, `on_access` and `on_evict` only for keys
/// that are tracked, and that `eviction_candidate` is only consulted when the
/// store is at capacity.
pub trait PolicyTracker<K>: fmt::Debug + Send {
    /// The policy this tracker implements.
    fn kind(&self) -> PolicyKind;

    /// Registers a key that was just inserted into the store.
    fn on_insert(&mut self, key: &K);

    /// Records a read, or an overwrite of an existing key.
    ///
    /// Order-insensitive policies leave this as a no-op.
    fn on_access(&mut self, _key: &K) {}

    /// The key that would be evicted next, if any key is tracked.
    fn eviction_candidate(&self) -> Option<&K>;

    /// Forgets a key that was removed from the store.
    fn on_evict(&mut self, key: &K);

    /// Number of tracked keys.
    fn len(&self) -> usize;

    /// Whether the tracker holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `key` is tracked.
    fn contains(&self, key: &K) -> bool;
}

// == Policy Kind ==
/// Tag selecting one of the five eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// First in, first out
    Fifo,
    /// Last in, first out
    Lifo,
    /// Least recently used
    Lru,
    /// Most recently used
    Mru,
    /// Least frequently used
    Lfu,
}

impl PolicyKind {
    /// Every supported policy.
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fifo,
        PolicyKind::Lifo,
        PolicyKind::Lru,
        PolicyKind::Mru,
        PolicyKind::Lfu,
    ];

    /// Lower-case policy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lifo => "lifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Mru => "mru",
            PolicyKind::Lfu => "lfu",
        }
    }

    /// True when reads change the eviction order.
    pub fn is_access_sensitive(&self) -> bool {
        matches!(self, PolicyKind::Lru | PolicyKind::Mru | PolicyKind::Lfu)
    }

    /// Builds an empty tracker for this policy.
    pub fn tracker<K>(&self) -> Box<dyn PolicyTracker<K>>
    where
        K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
    {
        match self {
            PolicyKind::Fifo => Box::new(FifoTracker::new()),
            PolicyKind::Lifo => Box::new(LifoTracker::new()),
            PolicyKind::Lru => Box::new(LruTracker::new()),
            PolicyKind::Mru => Box::new(MruTracker::new()),
            PolicyKind::Lfu => Box::new(LfuTracker::new()),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lifo" => Ok(PolicyKind::Lifo),
            "lru" => Ok(PolicyKind::Lru),
            "mru" => Ok(PolicyKind::Mru),
            "lfu" => Ok(PolicyKind::Lfu),
            _ => Err(CacheError::UnknownPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse_case_insensitive() {
        assert_eq!("FIFO".parse::<PolicyKind>().unwrap(), PolicyKind::Fifo);
        assert_eq!(" lfu ".parse::<PolicyKind>().unwrap(), PolicyKind::Lfu);
        assert_eq!("Mru".parse::<PolicyKind>().unwrap(), PolicyKind::Mru);
    }

    #[test]
    fn test_policy_parse_unknown() {
        let err = "arc".parse::<PolicyKind>().unwrap_err();
        assert_eq!(err, CacheError::UnknownPolicy("arc".to_string()));
    }

    #[test]
    fn test_policy_display_roundtrips() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.to_string().parse::<PolicyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_policy_serializes_lowercase() {
        let json = serde_json::to_string(&PolicyKind::Lru).unwrap();
        assert_eq!(json, "\"lru\"");
    }

    #[test]
    fn test_access_sensitivity() {
        assert!(!PolicyKind::Fifo.is_access_sensitive());
        assert!(!PolicyKind::Lifo.is_access_sensitive());
        assert!(PolicyKind::Lru.is_access_sensitive());
        assert!(PolicyKind::Mru.is_access_sensitive());
        assert!(PolicyKind::Lfu.is_access_sensitive());
    }

    #[test]
    fn test_tracker_factory_kind() {
        for kind in PolicyKind::ALL {
            let tracker = kind.tracker::<String>();
            assert_eq!(tracker.kind(), kind);
            assert!(tracker.is_empty());
        }
    }
}
