//! Statistics report
//!
//! Serializable summary of a cache's statistics, emitted by the workload driver.

use serde::Serialize;

use crate::backing::BackingStore;
use crate::cache::{CacheStats, CacheStore, Cacheable};

/// Snapshot of cache statistics at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// Raw counters
    #[serde(flatten)]
    pub stats: CacheStats,
    /// 100 * misses / accesses, 0.0 before any access
    pub fault_rate_percent: f64,
    /// Resident key limit
    pub capacity: usize,
    /// Keys currently resident
    pub resident: usize,
    /// Report time in ISO 8601 format
    pub generated_at: String,
}

impl StatsReport {
    /// Builds a report from the cache's current state.
    pub fn from_cache<T: Cacheable, S: BackingStore<T>>(cache: &CacheStore<T, S>) -> Self {
        Self {
            stats: cache.stats(),
            fault_rate_percent: cache.fault_rate_percent(),
            capacity: cache.capacity(),
            resident: cache.len(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
