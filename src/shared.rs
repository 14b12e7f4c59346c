//! Shared Cache Handle
//!
//! Wraps a `CacheStore` for use from several tasks.
//!
//! A single mutex guards the whole cache and is held for the duration of each
//! operation, so every call observes and leaves the same invariants as the
//! single-threaded `CacheStore`.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::backing::BackingStore;
use crate::cache::{CacheStats, CacheStore, Cacheable};
use crate::error::Result;

/// Cloneable, task-safe handle to a `CacheStore`.
pub struct SharedCache<T: Cacheable, S> {
    inner: Arc<Mutex<CacheStore<T, S>>>,
}

impl<T: Cacheable, S> Clone for SharedCache<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Cacheable, S: BackingStore<T>> SharedCache<T, S> {
    /// Creates a handle owning a new cache over `store`.
    pub fn new(capacity: usize, store: S) -> Self {
        Self::from_cache(CacheStore::new(capacity, store))
    }

    pub fn from_cache(cache: CacheStore<T, S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    pub async fn get(&self, key: &T::Key) -> Result<Option<T>> {
        self.inner.lock().await.get(key)
    }

    pub async fn put(&self, item: T) -> Result<()> {
        self.inner.lock().await.put(item)
    }

    pub async fn remove(&self, key: &T::Key) -> Result<Option<T>> {
        self.inner.lock().await.remove(key)
    }

    /// Resident keys, most recently used first, as of the call.
    pub async fn keys(&self) -> Vec<T::Key> {
        self.inner.lock().await.keys().collect()
    }

    pub async fn set_capacity(&self, capacity: usize) {
        self.inner.lock().await.set_capacity(capacity);
    }

    pub async fn capacity(&self) -> usize {
        self.inner.lock().await.capacity()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    pub async fn fault_rate_percent(&self) -> f64 {
        self.inner.lock().await.fault_rate_percent()
    }

    pub async fn reset_stats(&self) {
        self.inner.lock().await.reset_stats();
    }

    /// Runs `f` with exclusive access to the underlying cache.
    pub async fn with_cache<R>(&self, f: impl FnOnce(&mut CacheStore<T, S>) -> R) -> R {
        let mut guard = self.inner.lock().await;
        f(&mut guard)
    }
}
