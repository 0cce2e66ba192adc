//! Shared Cache Handle
//!
//! Thread-safe front for [`CacheStore`]. Each operation runs entirely under
//! one exclusive lock, so compound check-then-act sequences never interleave.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{CacheOutcome, CacheStats, CacheStore, Clock, GetResult, SystemClock};
use crate::error::Result;

// == Cache ==
/// Cloneable handle to a single cache instance.
///
/// Values and stats are returned as owned copies; no reference into the
/// store escapes the lock.
#[derive(Debug)]
pub struct Cache<K, V, C = SystemClock> {
    inner: Arc<Mutex<CacheStore<K, V, C>>>,
}

impl<K, V, C> Clone for Cache<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Cache<K, V, SystemClock>
where
    K: Hash + Eq + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Result<Self> {
        CacheStore::new(capacity).map(Self::from_store)
    }
}

impl<K, V, C> Cache<K, V, C>
where
    K: Hash + Eq + Clone,
    C: Clock,
{
    pub fn with_clock(capacity: usize, clock: C) -> Result<Self> {
        CacheStore::with_clock(capacity, clock).map(Self::from_store)
    }

    /// Wraps an existing store.
    pub fn from_store(store: CacheStore<K, V, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// See [`CacheStore::get`].
    pub fn get<Q>(&self, key: &Q) -> GetResult<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().get(key)
    }

    /// See [`CacheStore::put`].
    pub fn put(&self, key: K, value: V, ttl: Option<u64>) -> Result<CacheOutcome> {
        self.inner.lock().put(key, value, ttl)
    }

    /// See [`CacheStore::delete`].
    pub fn delete<Q>(&self, key: &Q) -> CacheOutcome
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().delete(key)
    }

    /// See [`CacheStore::stats`].
    pub fn stats(&self) -> CacheStats<K> {
        self.inner.lock().stats()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::error::CacheError;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_cache_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cache<String, serde_json::Value>>();
        assert_send_sync::<Cache<u64, Vec<u8>, ManualClock>>();
    }

    #[test]
    fn test_cache_zero_capacity_rejected() {
        let result: Result<Cache<String, i32>> = Cache::new(0);
        assert_eq!(result.unwrap_err(), CacheError::InvalidCapacity);
    }

    #[test]
    fn test_clones_share_state() {
        let cache: Cache<String, i32> = Cache::new(3).unwrap();
        let other = cache.clone();

        cache.put("a".to_string(), 1, None).unwrap();

        assert_eq!(other.get("a"), GetResult::hit(1));
        assert_eq!(other.len(), 1);
        assert_eq!(other.capacity(), 3);
    }

    #[test]
    fn test_stats_snapshot_is_independent() {
        let cache: Cache<String, i32> = Cache::new(3).unwrap();
        cache.put("a".to_string(), 1, None).unwrap();

        let mut stats = cache.stats();
        stats.items.push("intruder".to_string());
        cache.put("b".to_string(), 2, None).unwrap();

        assert_eq!(cache.stats().items, vec!["b", "a"]);
        assert_eq!(stats.items, vec!["a", "intruder"]);
    }

    #[test]
    fn test_expiry_through_handle() {
        let clock = ManualClock::from_secs(100);
        let cache: Cache<&str, i32, ManualClock> = Cache::with_clock(3, clock.clone()).unwrap();

        cache.put("a", 1, Some(10)).unwrap();
        clock.set_secs(111);

        assert_eq!(cache.get(&"a").outcome, CacheOutcome::Expired);
        assert_eq!(cache.get(&"a").outcome, CacheOutcome::Miss);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_puts_respect_capacity() {
        let capacity = 16;
        let cache: Cache<String, usize> = Cache::new(capacity).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..500 {
                        let key = format!("t{}-{}", t, i % 40);
                        cache.put(key.clone(), i, None).unwrap();
                        assert!(cache.len() <= capacity);
                        let _ = cache.get(&key);
                        if i % 7 == 0 {
                            cache.delete(&key);
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("worker should not panic");
        }

        let stats = cache.stats();
        assert!(stats.size <= capacity);
        assert_eq!(stats.size, stats.items.len());
        let unique: HashSet<_> = stats.items.iter().collect();
        assert_eq!(unique.len(), stats.items.len());
        cache.inner.lock().assert_consistent();
    }

    #[test]
    fn test_concurrent_put_same_key_creates_once() {
        let cache: Cache<String, usize> = Cache::new(4).unwrap();

        let handles: Vec<_> = (0..16)
            .map(|t| {
                let cache = cache.clone();
                thread::spawn(move || cache.put("shared".to_string(), t, None).unwrap())
            })
            .collect();

        let outcomes: Vec<CacheOutcome> = handles
            .into_iter()
            .map(|h| h.join().expect("worker should not panic"))
            .collect();

        let created = outcomes
            .iter()
            .filter(|o| **o == CacheOutcome::Created)
            .count();
        assert_eq!(created, 1);
        assert_eq!(outcomes.len() - created, 15);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_concurrent_expiry_reported_once() {
        let clock = ManualClock::from_secs(0);
        let cache: Cache<String, i32, ManualClock> = Cache::with_clock(4, clock.clone()).unwrap();
        cache.put("k".to_string(), 1, Some(1)).unwrap();
        clock.set_secs(5);

        let handles: Vec<_> = (0..12)
            .map(|_| {
                let cache = cache.clone();
                thread::spawn(move || cache.get("k").outcome)
            })
            .collect();

        let expired = handles
            .into_iter()
            .map(|h| h.join().expect("worker should not panic"))
            .filter(|o| *o == CacheOutcome::Expired)
            .count();
        assert_eq!(expired, 1);
    }
}
