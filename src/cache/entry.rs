//! Cache Entry Module
//!
//! Defines the key/value pair handed back when an entry leaves the store.

// == Cache Entry ==
/// A single key/value pair held by the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    /// The entry key, unique within the store
    pub key: K,
    /// The stored value
    pub value: V,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates a new cache entry.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the entry into its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for CacheEntry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_into_parts() {
        let entry = CacheEntry::new("k", 7);
        assert_eq!(entry.into_parts(), ("k", 7));
    }

    #[test]
    fn test_entry_from_tuple() {
        let entry: CacheEntry<&str, &str> = ("k", "v").into();
        assert_eq!(entry.key, "k");
        assert_eq!(entry.value, "v");
    }
}
