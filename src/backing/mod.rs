//! Backing Store Module
//!
//! The durable tier the cache is layered over.
//!
//! The cache treats the backing store as the single source of truth for
//! existence and value; it only tracks which keys are resident.

mod memory;

pub use memory::MemoryStore;

use crate::cache::Cacheable;
use crate::error::Result;

// == Backing Store ==
/// Durable mapping from key to item.
///
/// `Ok(None)` means the key does not exist; `Err` means the operation failed.
pub trait BackingStore<T: Cacheable> {
    /// Fetches the item stored under `key`.
    fn retrieve(&self, key: &T::Key) -> Result<Option<T>>;

    /// Inserts or overwrites the item under its own key.
    fn persist(&mut self, item: T) -> Result<()>;

    /// Deletes `key`, returning the item that was stored.
    fn remove(&mut self, key: &T::Key) -> Result<Option<T>>;
}

impl<T: Cacheable, S: BackingStore<T> + ?Sized> BackingStore<T> for Box<S> {
    fn retrieve(&self, key: &T::Key) -> Result<Option<T>> {
        (**self).retrieve(key)
    }

    fn persist(&mut self, item: T) -> Result<()> {
        (**self).persist(item)
    }

    fn remove(&mut self, key: &T::Key) -> Result<Option<T>> {
        (**self).remove(key)
    }
}
