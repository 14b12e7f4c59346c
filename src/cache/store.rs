//! Cache Store Module
//!
//! Main cache engine combining LRU residency tracking with a backing store.

use std::fmt;

use tracing::{debug, info, trace, warn};

use crate::backing::BackingStore;
use crate::cache::{CacheStats, Cacheable, Keys, LruTracker};
use crate::error::Result;

// == Cache Store ==
/// Size-bounded LRU cache in front of a backing store.
///
/// The backing store owns every item; the cache only decides which keys are
/// resident. Evicting a key never removes it from the backing store.
pub struct CacheStore<T: Cacheable, S> {
    /// Durable tier, source of truth for values
    store: S,
    /// Resident keys in recency order
    lru: LruTracker<T::Key>,
    /// Access statistics
    stats: CacheStats,
    /// Maximum number of resident keys
    capacity: usize,
}

impl<T: Cacheable, S: BackingStore<T>> CacheStore<T, S> {
    // == Constructor ==
    /// Creates a new CacheStore over `store` holding at most `capacity` keys.
    pub fn new(capacity: usize, store: S) -> Self {
        Self {
            store,
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity,
        }
    }

    // == Capacity ==
    /// Replaces the resident key limit.
    ///
    /// Lowering it does not evict right away; each later admission evicts at
    /// most one key until the cache fits again.
    pub fn set_capacity(&mut self, capacity: usize) {
        info!(old = self.capacity, new = capacity, "Cache capacity changed");
        self.capacity = capacity;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Get ==
    /// Retrieves an item by key and makes the key most recently used.
    ///
    /// Returns `Ok(None)` if the backing store has no such key; statistics
    /// and residency are left untouched in that case.
    pub fn get(&mut self, key: &T::Key) -> Result<Option<T>> {
        let item = match self.store.retrieve(key) {
            Ok(Some(item)) => item,
            Ok(None) => return Ok(None),
            Err(err) => {
                warn!(?key, error = %err, "Backing store retrieve failed");
                return Err(err);
            }
        };

        self.stats.record_access();
        if self.lru.contains(key) {
            trace!(?key, "Warm hit");
            self.lru.touch(key);
        } else {
            self.stats.record_miss();
            self.admit(key);
        }

        Ok(Some(item))
    }

    // == Put ==
    /// Stores an item and makes its key most recently used.
    ///
    /// Performs at most one eviction.
    pub fn put(&mut self, item: T) -> Result<()> {
        let key = item.key();

        if self.get(&key)?.is_some() {
            // Already promoted by get
            return self.persist(item);
        }

        // Persist before admitting so a failed write never leaves the key resident
        self.persist(item)?;
        self.admit(&key);
        Ok(())
    }

    // == Remove ==
    /// Removes a key from the cache and from the backing store.
    ///
    /// Returns the item the backing store held, or `Ok(None)` if it had none.
    pub fn remove(&mut self, key: &T::Key) -> Result<Option<T>> {
        if self.lru.remove(key) {
            debug!(?key, "Dropped key from residency");
        }
        self.store.remove(key).map_err(|err| {
            warn!(?key, error = %err, "Backing store remove failed");
            err
        })
    }

    // == Keys ==
    /// Snapshot of resident keys, most recently used first.
    pub fn keys(&self) -> Keys<T::Key> {
        self.lru.keys()
    }

    // == Residency ==
    /// Checks if a key is currently resident.
    pub fn is_resident(&self, key: &T::Key) -> bool {
        self.lru.contains(key)
    }

    /// Returns the number of resident keys.
    pub fn len(&self) -> usize {
        self.lru.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lru.is_empty()
    }

    /// Drops every key from residency. The backing store is untouched.
    pub fn clear_residency(&mut self) {
        debug!(resident = self.lru.len(), "Clearing residency");
        self.lru.clear();
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// 100 * misses / accesses, or 0.0 before any access.
    pub fn fault_rate_percent(&self) -> f64 {
        self.stats.fault_rate_percent()
    }

    /// Fault rate, failing with `NoAccessesRecorded` before any access.
    pub fn try_fault_rate_percent(&self) -> Result<f64> {
        self.stats.try_fault_rate_percent()
    }

    /// Zeroes all counters. Residency and the backing store are untouched.
    pub fn reset_stats(&mut self) {
        info!("Cache statistics reset");
        self.stats.reset();
    }

    // == Backing Store Access ==
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // == Internals ==
    /// Makes a non-resident key most recently used, evicting the LRU key if
    /// one more would exceed capacity.
    fn admit(&mut self, key: &T::Key) {
        if self.lru.len() >= self.capacity {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.stats.record_eviction();
                debug!(?evicted, admitted = ?key, "Evicted least recently used key");
            }
        }

        if self.capacity == 0 {
            self.stats.record_eviction();
            debug!(?key, "Zero capacity, key not kept resident");
            return;
        }

        self.lru.touch(key);
    }

    fn persist(&mut self, item: T) -> Result<()> {
        self.store.persist(item).map_err(|err| {
            warn!(error = %err, "Backing store persist failed");
            err
        })
    }
}

impl<T: Cacheable, S: fmt::Debug> fmt::Debug for CacheStore<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("store", &self.store)
            .field("lru", &self.lru)
            .field("stats", &self.stats)
            .field("capacity", &self.capacity)
            .finish()
    }
}
