//! Integration Tests for the cache engine
//!
//! Exercises the public API against in-memory and instrumented backing stores.

use std::cell::Cell;
use std::collections::HashMap;

use lru_store::{BackingStore, CacheError, CacheStore, Cacheable, MemoryStore, Result};

// == Helpers ==

#[derive(Debug, Clone, PartialEq)]
struct Account {
    id: String,
    balance: i64,
}

impl Cacheable for Account {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }
}

fn account(id: &str, balance: i64) -> Account {
    Account {
        id: id.to_string(),
        balance,
    }
}

fn key(id: &str) -> String {
    id.to_string()
}

fn resident<S: BackingStore<Account>>(cache: &CacheStore<Account, S>) -> Vec<String> {
    cache.keys().collect()
}

/// Backing store that counts how often each operation is called.
#[derive(Default)]
struct CountingStore {
    items: HashMap<String, Account>,
    retrieves: Cell<usize>,
    persists: usize,
    removes: usize,
}

impl BackingStore<Account> for CountingStore {
    fn retrieve(&self, key: &String) -> Result<Option<Account>> {
        self.retrieves.set(self.retrieves.get() + 1);
        Ok(self.items.get(key).cloned())
    }

    fn persist(&mut self, item: Account) -> Result<()> {
        self.persists += 1;
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    fn remove(&mut self, key: &String) -> Result<Option<Account>> {
        self.removes += 1;
        Ok(self.items.remove(key))
    }
}

// == Scenarios ==

#[test]
fn test_capacity_two_evicts_oldest_and_repromotes() {
    let mut cache: CacheStore<Account, MemoryStore<Account>> =
        CacheStore::new(2, MemoryStore::new());
    cache.put(account("A", 1)).unwrap();
    cache.put(account("B", 2)).unwrap();
    cache.put(account("C", 3)).unwrap();

    assert_eq!(resident(&cache), vec![key("C"), key("B")]);

    assert_eq!(cache.get(&key("A")).unwrap(), Some(account("A", 1)));
    assert_eq!(resident(&cache), vec![key("A"), key("C")]);
}

#[test]
fn test_unknown_key_leaves_counters_alone() {
    let mut cache: CacheStore<Account, MemoryStore<Account>> =
        CacheStore::new(2, MemoryStore::new());

    assert_eq!(cache.get(&key("nobody")).unwrap(), None);
    assert_eq!(cache.stats().accesses(), 0);
    assert_eq!(cache.stats().misses(), 0);
    assert!(matches!(
        cache.try_fault_rate_percent(),
        Err(CacheError::NoAccessesRecorded)
    ));
}

#[test]
fn test_remove_clears_both_tiers() {
    let mut cache: CacheStore<Account, MemoryStore<Account>> =
        CacheStore::new(2, MemoryStore::new());
    cache.put(account("A", 1)).unwrap();

    assert_eq!(cache.remove(&key("A")).unwrap(), Some(account("A", 1)));
    assert!(!cache.is_resident(&key("A")));
    assert!(!cache.store().contains_key(&key("A")));
    assert_eq!(cache.get(&key("A")).unwrap(), None);
}

// == Backing Store Contract ==

#[test]
fn test_every_get_consults_the_store() {
    let mut cache: CacheStore<Account, CountingStore> = CacheStore::new(4, CountingStore::default());
    cache.put(account("A", 1)).unwrap();

    for _ in 0..3 {
        cache.get(&key("A")).unwrap();
    }

    // One lookup from put, three from get
    assert_eq!(cache.store().retrieves.get(), 4);
    assert_eq!(cache.store().persists, 1);
}

#[test]
fn test_eviction_never_removes_from_store() {
    let mut cache: CacheStore<Account, CountingStore> = CacheStore::new(1, CountingStore::default());
    for i in 0..10 {
        cache.put(account(&format!("acct{}", i), i)).unwrap();
    }

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.store().removes, 0);
    assert_eq!(cache.store().items.len(), 10);
    assert_eq!(cache.stats().evictions(), 9);
}

#[test]
fn test_put_overwrites_durable_value() {
    let mut cache: CacheStore<Account, CountingStore> = CacheStore::new(1, CountingStore::default());
    cache.put(account("A", 1)).unwrap();
    cache.put(account("B", 2)).unwrap();
    cache.put(account("A", 100)).unwrap();

    assert_eq!(cache.get(&key("A")).unwrap(), Some(account("A", 100)));
    assert_eq!(cache.store().persists, 3);
    // put(A) after eviction was a cold hit, the get after it warm
    assert_eq!(cache.stats().accesses(), 2);
    assert_eq!(cache.stats().misses(), 1);
    assert_eq!(cache.fault_rate_percent(), 50.0);
}

#[test]
fn test_boxed_backing_store() {
    let store: Box<dyn BackingStore<Account>> = Box::new(MemoryStore::new());
    let mut cache: CacheStore<Account, _> = CacheStore::new(2, store);

    cache.put(account("A", 1)).unwrap();
    cache.put(account("B", 2)).unwrap();
    cache.get(&key("A")).unwrap();

    assert_eq!(resident(&cache), vec![key("A"), key("B")]);
}

#[test]
fn test_keys_iterators_are_independent() {
    let mut cache: CacheStore<Account, MemoryStore<Account>> =
        CacheStore::new(3, MemoryStore::new());
    cache.put(account("A", 1)).unwrap();
    cache.put(account("B", 2)).unwrap();

    let before = cache.keys();
    cache.put(account("C", 3)).unwrap();
    let after = cache.keys();

    assert_eq!(before.collect::<Vec<_>>(), vec![key("B"), key("A")]);
    assert_eq!(after.collect::<Vec<_>>(), vec![key("C"), key("B"), key("A")]);
}
