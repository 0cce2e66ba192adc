//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU ordering and lazy
//! TTL expiration. Not synchronized; see [`crate::cache::Cache`] for the
//! shared handle.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::cache::lru::{LruList, NodeId};
use crate::cache::{CacheEntry, CacheOutcome, CacheStats, Clock, GetResult, SystemClock};
use crate::error::{CacheError, Result};

#[derive(Debug)]
struct Slot<V> {
    entry: CacheEntry<V>,
    node: NodeId,
}

// == Cache Store ==
/// Bounded key-value store with LRU eviction and per-entry TTL.
///
/// Every key in `entries` owns exactly one node in `lru` and vice versa.
#[derive(Debug)]
pub struct CacheStore<K, V, C = SystemClock> {
    /// Key to entry and recency handle
    entries: HashMap<K, Slot<V>>,
    /// Recency order, MRU at the front
    lru: LruList<K>,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Time source for stamping and expiry checks
    clock: C,
}

impl<K, V> CacheStore<K, V, SystemClock>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates a store holding at most `capacity` entries, using wall-clock time.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_clock(capacity, SystemClock)
    }
}

impl<K, V, C> CacheStore<K, V, C>
where
    K: Hash + Eq + Clone,
    C: Clock,
{
    /// Creates a store reading time from `clock`.
    pub fn with_clock(capacity: usize, clock: C) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity);
        }

        Ok(Self {
            entries: HashMap::new(),
            lru: LruList::new(),
            capacity,
            clock,
        })
    }

    // == Get ==
    /// Looks up `key`.
    ///
    /// A fresh entry becomes most recently used and its value is returned
    /// with [`CacheOutcome::Hit`]. An entry past its TTL is removed and
    /// reported as [`CacheOutcome::Expired`]; later lookups see a miss.
    pub fn get<Q>(&mut self, key: &Q) -> GetResult<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        let now = self.clock.now_ms();

        let Some(slot) = self.entries.get(key) else {
            return GetResult::miss();
        };

        if slot.entry.is_expired_at(now) {
            self.remove_entry(key);
            debug!(size = self.entries.len(), "removed expired entry on access");
            return GetResult::expired();
        }

        let node = slot.node;
        let value = slot.entry.value.clone();
        self.lru.move_to_front(node);
        GetResult::hit(value)
    }

    // == Put ==
    /// Stores `value` under `key` with an optional TTL in seconds.
    ///
    /// An existing key is overwritten in place, its TTL and timestamp reset,
    /// and it becomes most recently used ([`CacheOutcome::Updated`]). A new
    /// key evicts the least recently used entry when the store is full,
    /// whether or not that entry has expired ([`CacheOutcome::Created`]).
    ///
    /// A zero TTL is rejected with [`CacheError::InvalidTtl`] before the
    /// store is touched.
    pub fn put(&mut self, key: K, value: V, ttl: Option<u64>) -> Result<CacheOutcome> {
        if ttl == Some(0) {
            return Err(CacheError::InvalidTtl);
        }

        let entry = CacheEntry::new(value, ttl, self.clock.now_ms());

        if let Some(slot) = self.entries.get_mut(&key) {
            slot.entry = entry;
            let node = slot.node;
            self.lru.move_to_front(node);
            return Ok(CacheOutcome::Updated);
        }

        if self.entries.len() >= self.capacity {
            self.evict_lru();
        }

        let node = self.lru.push_front(key.clone());
        self.entries.insert(key, Slot { entry, node });
        Ok(CacheOutcome::Created)
    }

    // == Delete ==
    /// Removes `key`, expired or not.
    ///
    /// Returns [`CacheOutcome::Deleted`] if it was present, otherwise
    /// [`CacheOutcome::Miss`].
    pub fn delete<Q>(&mut self, key: &Q) -> CacheOutcome
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.remove_entry(key) {
            Some(_) => CacheOutcome::Deleted,
            None => CacheOutcome::Miss,
        }
    }

    // == Stats ==
    /// Returns a snapshot of current contents.
    ///
    /// Performs no expiry checks and does not change recency order.
    pub fn stats(&self) -> CacheStats<K> {
        CacheStats::new(self.capacity, self.lru.iter().cloned().collect())
    }

    /// Returns true if `key` is physically present. No expiry check, no
    /// recency update.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_lru(&mut self) {
        if let Some(victim) = self.lru.pop_back() {
            self.entries.remove(&victim);
            debug!(capacity = self.capacity, "evicted least recently used entry");
        }
    }

    fn remove_entry<Q>(&mut self, key: &Q) -> Option<CacheEntry<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.entries.remove(key)?;
        self.lru.remove(slot.node);
        Some(slot.entry)
    }

    /// Panics if the map and the recency list disagree.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.entries.len(), self.lru.len(), "map/list size mismatch");
        assert!(self.entries.len() <= self.capacity, "capacity exceeded");
        for (key, slot) in &self.entries {
            assert!(
                self.lru.get(slot.node) == Some(key),
                "entry points at a foreign list node"
            );
        }
        assert_eq!(self.lru.iter().count(), self.lru.len(), "list is not linear");
    }
}
