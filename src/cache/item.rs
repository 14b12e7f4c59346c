//! Cacheable Item Module
//!
//! Defines how the cache extracts a key from an opaque item.

use std::fmt::Debug;
use std::hash::Hash;

// == Cacheable ==
/// An item that can be stored behind the cache.
///
/// Each item is identified by exactly one key, which must be unique per item.
pub trait Cacheable {
    /// Identifier type for this item
    type Key: Eq + Hash + Clone + Debug;

    /// Returns the key this item is stored under.
    fn key(&self) -> Self::Key;
}
