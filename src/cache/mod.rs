//! Cache Module
//!
//! Provides a bounded in-memory cache with pluggable eviction policies.

mod engine;
mod entry;
mod event;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use engine::Cache;
pub use entry::CacheEntry;
pub use event::{EventKind, EvictionEvent, EvictionListener};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::BoundedStore;

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_MAX_ITEMS: usize = 4;
