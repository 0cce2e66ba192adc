//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Time of the last insert or update (Unix milliseconds)
    pub stored_at: u64,
    /// Time to live in seconds, None = no expiration
    pub ttl: Option<u64>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped at `now_ms`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL in seconds, already validated as non-zero
    /// * `now_ms` - Current time in Unix milliseconds
    pub fn new(value: V, ttl: Option<u64>, now_ms: u64) -> Self {
        Self {
            value,
            stored_at: now_ms,
            ttl,
        }
    }

    // == Expires At ==
    /// Last instant (Unix milliseconds) at which the entry is still fresh.
    pub fn expires_at(&self) -> Option<u64> {
        self.ttl
            .map(|ttl| self.stored_at.saturating_add(ttl.saturating_mul(1000)))
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// The boundary instant `stored_at + ttl` itself is still fresh; the
    /// entry expires strictly after it.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        match self.expires_at() {
            Some(expires) => now_ms > expires,
            None => false,
        }
    }
}
