//! Cache Statistics Module
//!
//! Tracks access, fault and eviction counters for the cache.

use serde::Serialize;

use crate::error::{CacheError, Result};

// == Cache Stats ==
/// Access statistics for a cache.
///
/// Counters only move through the crate-private `record_*` methods; callers
/// get snapshots via `CacheStore::stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    accesses: u64,
    misses: u64,
    evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Accessors ==
    /// Number of gets/puts that found an existing item.
    pub fn accesses(&self) -> u64 {
        self.accesses
    }

    /// Accesses whose key was not resident at the time.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Keys dropped from residency by the LRU policy.
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    // == Fault Rate ==
    /// Percentage of accesses that were faults.
    ///
    /// Returns 100 * misses / accesses, or 0.0 if no access has been recorded.
    pub fn fault_rate_percent(&self) -> f64 {
        self.try_fault_rate_percent().unwrap_or(0.0)
    }

    /// Like `fault_rate_percent`, but reports the zero-access case as an error.
    pub fn try_fault_rate_percent(&self) -> Result<f64> {
        if self.accesses == 0 {
            return Err(CacheError::NoAccessesRecorded);
        }
        Ok(100.0 * self.misses as f64 / self.accesses as f64)
    }

    // == Recording ==
    pub(crate) fn record_access(&mut self) {
        self.accesses += 1;
    }

    /// Must follow a `record_access` for the same operation.
    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
