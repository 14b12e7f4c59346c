//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache and its backing stores.
///
/// A missing key is never an error: lookups report it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The backing store failed to carry out an operation
    #[error("Backing store {operation} failed: {message}")]
    Store {
        operation: &'static str,
        message: String,
    },

    /// Fault rate requested before any access was recorded
    #[error("No accesses recorded; fault rate is undefined")]
    NoAccessesRecorded,
}

impl CacheError {
    // == Constructors ==
    /// Builds a store failure for the given operation name.
    pub fn store(operation: &'static str, message: impl Into<String>) -> Self {
        CacheError::Store {
            operation,
            message: message.into(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
