//! Query cache storage.
//!
//! Holds raw response bodies keyed by [`QueryKey`], with LRU eviction.
//! Invalidation marks entries stale instead of dropping them, so a stale
//! payload stays readable while a refetch is underway.

use std::sync::RwLock;

use bytes::Bytes;
use lru::LruCache;
use metrics::counter;
use time::OffsetDateTime;

use super::config::CacheConfig;
use super::keys::QueryKey;
use super::lock;

/// One cached response body.
#[derive(Debug, Clone)]
pub struct CachedQuery {
    pub body: Bytes,
    /// Set by invalidation; the payload stays until the next successful fetch.
    pub stale: bool,
    pub fetched_at: OffsetDateTime,
}

/// LRU store of cached query bodies.
pub struct QueryStore {
    entries: RwLock<LruCache<QueryKey, CachedQuery>>,
}

impl QueryStore {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            entries: RwLock::new(LruCache::new(config.query_limit_non_zero())),
        }
    }

    /// Returns the body only when the entry exists and is fresh.
    pub fn get_fresh(&self, key: &QueryKey) -> Option<Bytes> {
        lock::write(&self.entries, "get_fresh")
            .get(key)
            .filter(|entry| !entry.stale)
            .map(|entry| entry.body.clone())
    }

    /// Returns the entry fresh or stale. Stale reads back the last known
    /// payload while a refetch is in flight.
    pub fn get_any(&self, key: &QueryKey) -> Option<CachedQuery> {
        lock::write(&self.entries, "get_any").get(key).cloned()
    }

    /// Insert a fresh body, returning the key evicted by the LRU if any so
    /// the registry can drop its tag links.
    pub fn insert(&self, key: QueryKey, body: Bytes) -> Option<QueryKey> {
        let entry = CachedQuery {
            body,
            stale: false,
            fetched_at: OffsetDateTime::now_utc(),
        };
        let evicted = lock::write(&self.entries, "insert")
            .push(key, entry)
            .map(|(evicted_key, _)| evicted_key);
        if evicted.is_some() {
            counter!("mensa_cache_evict_total").increment(1);
        }
        evicted
    }

    /// Mark an entry stale without dropping its payload. Returns whether the
    /// entry existed.
    pub fn mark_stale(&self, key: &QueryKey) -> bool {
        match lock::write(&self.entries, "mark_stale").peek_mut(key) {
            Some(entry) => {
                entry.stale = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, key: &QueryKey) {
        lock::write(&self.entries, "remove").pop(key);
    }

    pub fn clear(&self) {
        lock::write(&self.entries, "clear").clear();
    }

    pub fn len(&self) -> usize {
        lock::read(&self.entries, "len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use uuid::Uuid;

    use super::*;

    fn store_with_limit(limit: usize) -> QueryStore {
        QueryStore::new(&CacheConfig {
            enabled: true,
            query_limit: limit,
        })
    }

    #[test]
    fn insert_then_fresh_read() {
        let store = store_with_limit(16);
        let key = QueryKey::GroupList;

        assert!(store.get_fresh(&key).is_none());

        store.insert(key.clone(), Bytes::from_static(b"[]"));
        assert_eq!(store.get_fresh(&key), Some(Bytes::from_static(b"[]")));
    }

    #[test]
    fn stale_entry_keeps_payload_but_misses_fresh_read() {
        let store = store_with_limit(16);
        let key = QueryKey::OrderList(Uuid::from_u128(1));

        store.insert(key.clone(), Bytes::from_static(b"[1]"));
        assert!(store.mark_stale(&key));

        assert!(store.get_fresh(&key).is_none());
        let entry = store.get_any(&key).expect("stale entry kept");
        assert!(entry.stale);
        assert_eq!(entry.body, Bytes::from_static(b"[1]"));
    }

    #[test]
    fn reinsert_clears_staleness() {
        let store = store_with_limit(16);
        let key = QueryKey::GroupList;

        store.insert(key.clone(), Bytes::from_static(b"old"));
        store.mark_stale(&key);
        store.insert(key.clone(), Bytes::from_static(b"new"));

        assert_eq!(store.get_fresh(&key), Some(Bytes::from_static(b"new")));
    }

    #[test]
    fn mark_stale_on_missing_entry_is_noop() {
        let store = store_with_limit(16);
        assert!(!store.mark_stale(&QueryKey::UserList));
    }

    #[test]
    fn lru_eviction_reports_victim() {
        let store = store_with_limit(2);
        let a = QueryKey::Group(Uuid::from_u128(1));
        let b = QueryKey::Group(Uuid::from_u128(2));
        let c = QueryKey::Group(Uuid::from_u128(3));

        assert!(store.insert(a.clone(), Bytes::from_static(b"a")).is_none());
        assert!(store.insert(b.clone(), Bytes::from_static(b"b")).is_none());

        let evicted = store.insert(c.clone(), Bytes::from_static(b"c"));
        assert_eq!(evicted, Some(a.clone()));

        assert!(store.get_fresh(&a).is_none());
        assert!(store.get_fresh(&b).is_some());
        assert!(store.get_fresh(&c).is_some());
    }

    #[test]
    fn recovers_from_poisoned_lock() {
        let store = store_with_limit(16);

        let _ = catch_unwind(AssertUnwindSafe(|| {
            let _guard = store.entries.write().expect("entries lock");
            panic!("poison entries lock");
        }));

        store.insert(QueryKey::GroupList, Bytes::from_static(b"[]"));
        assert!(store.get_fresh(&QueryKey::GroupList).is_some());
    }
}
