//! Bounded Cache - A fixed-capacity in-memory key/value cache
//!
//! Provides FIFO, LIFO, LRU, MRU and LFU eviction over a shared bounded store,
//! with a synchronous discard notification for every eviction.

pub mod cache;
pub mod command;
pub mod config;
pub mod error;
pub mod policy;

pub use cache::{Cache, CacheStats, EvictionEvent, SharedCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use policy::PolicyKind;
