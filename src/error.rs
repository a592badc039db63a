//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// Lookup misses and empty puts are not errors; they are reported through
/// `Option` and silently ignored respectively.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Cache constructed with a capacity that cannot hold a single entry
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Policy name that does not match any known eviction policy
    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),

    /// Malformed line given to the command driver
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Store and policy tracker disagree about which keys are present
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::InvalidCapacity(0).to_string(),
            "Invalid capacity: 0 (must be at least 1)"
        );
        assert_eq!(
            CacheError::UnknownPolicy("arc".to_string()).to_string(),
            "Unknown policy: arc"
        );
    }
}
