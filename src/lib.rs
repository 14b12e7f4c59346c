//! LRU Store - a size-bounded LRU cache over a pluggable backing store
//!
//! The cache keeps recently used keys resident and defers every value to the
//! backing store, tracking fault-rate statistics along the way.

pub mod backing;
pub mod cache;
pub mod config;
pub mod error;
pub mod report;
pub mod shared;
pub mod workload;

pub use backing::{BackingStore, MemoryStore};
pub use cache::{CacheStats, CacheStore, Cacheable, Keys};
pub use config::Config;
pub use error::{CacheError, Result};
pub use report::StatsReport;
pub use shared::SharedCache;
