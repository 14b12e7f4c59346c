//! Cache Module
//!
//! Provides LRU residency tracking over a pluggable backing store.

mod item;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use item::Cacheable;
pub use lru::{Keys, LruTracker};
pub use stats::CacheStats;
pub use store::CacheStore;
