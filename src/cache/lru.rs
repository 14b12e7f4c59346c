//! LRU Tracker Module
//!
//! Implements Least Recently Used ordering of resident keys.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// A key appears at most once.
#[derive(Debug, Clone)]
pub struct LruTracker<K> {
    /// Order of keys by access time
    order: VecDeque<K>,
}

impl<K> Default for LruTracker<K> {
    fn default() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }
}

impl<K: PartialEq + Clone> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as recently used (moves to front).
    ///
    /// If key exists, removes it first then adds to front.
    /// If key is new, just adds to front.
    pub fn touch(&mut self, key: &K) {
        self.remove(key);
        self.order.push_front(key.clone());
    }

    // == Remove ==
    /// Removes a key from the tracker. Returns whether it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.order.iter().position(|k| k == key) {
            Some(index) => {
                self.order.remove(index);
                true
            }
            None => false,
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        self.order.pop_back()
    }

    // == Peek ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.back()
    }

    /// Returns the most recently used key without removing it.
    pub fn peek_newest(&self) -> Option<&K> {
        self.order.front()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.order.iter().any(|k| k == key)
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Traversal ==
    /// Borrows the keys front to back (most recent first).
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter()
    }

    /// Copies the current order into an independent iterator.
    pub fn keys(&self) -> Keys<K> {
        Keys {
            inner: self.order.iter().cloned().collect::<Vec<_>>().into_iter(),
        }
    }
}

// == Keys Iterator ==
/// Snapshot of resident keys, most recently used first.
///
/// Later changes to the tracker are not observed.
#[derive(Debug, Clone)]
pub struct Keys<K> {
    inner: std::vec::IntoIter<K>,
}

impl<K> Iterator for Keys<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for Keys<K> {}
