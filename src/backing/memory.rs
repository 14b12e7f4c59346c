//! In-memory backing store.

use std::collections::HashMap;

use crate::backing::BackingStore;
use crate::cache::Cacheable;
use crate::error::Result;

// == Memory Store ==
/// HashMap-backed store. Never fails.
///
/// Items are cloned out on `retrieve`, the same way a real store would hand
/// back a fresh copy.
#[derive(Debug, Clone)]
pub struct MemoryStore<T: Cacheable> {
    items: HashMap<T::Key, T>,
}

impl<T: Cacheable> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl<T: Cacheable> MemoryStore<T> {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `items`; later duplicates win.
    pub fn with_items(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.key(), item)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_key(&self, key: &T::Key) -> bool {
        self.items.contains_key(key)
    }
}

impl<T: Cacheable + Clone> BackingStore<T> for MemoryStore<T> {
    fn retrieve(&self, key: &T::Key) -> Result<Option<T>> {
        Ok(self.items.get(key).cloned())
    }

    fn persist(&mut self, item: T) -> Result<()> {
        self.items.insert(item.key(), item);
        Ok(())
    }

    fn remove(&mut self, key: &T::Key) -> Result<Option<T>> {
        Ok(self.items.remove(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Doc {
        id: String,
        body: String,
    }

    impl Cacheable for Doc {
        type Key = String;

        fn key(&self) -> String {
            self.id.clone()
        }
    }

    fn doc(id: &str, body: &str) -> Doc {
        Doc {
            id: id.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_memory_store_persist_and_retrieve() {
        let mut store: MemoryStore<Doc> = MemoryStore::new();
        store.persist(doc("a", "first")).unwrap();

        assert_eq!(store.retrieve(&"a".to_string()).unwrap(), Some(doc("a", "first")));
        assert_eq!(store.retrieve(&"b".to_string()).unwrap(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_overwrite() {
        let mut store: MemoryStore<Doc> = MemoryStore::new();
        store.persist(doc("a", "first")).unwrap();
        store.persist(doc("a", "second")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.retrieve(&"a".to_string()).unwrap().unwrap().body, "second");
    }

    #[test]
    fn test_memory_store_remove() {
        let mut store = MemoryStore::with_items([doc("a", "x"), doc("b", "y")]);

        assert_eq!(store.remove(&"a".to_string()).unwrap(), Some(doc("a", "x")));
        assert_eq!(store.remove(&"a".to_string()).unwrap(), None);
        assert!(!store.contains_key(&"a".to_string()));
        assert!(store.contains_key(&"b".to_string()));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn BackingStore<Doc>> = Box::new(MemoryStore::new());
        store.persist(doc("k", "v")).unwrap();
        assert!(store.retrieve(&"k".to_string()).unwrap().is_some());
    }
}
