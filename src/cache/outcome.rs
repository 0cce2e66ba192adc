//! Cache Outcome Module
//!
//! Classifies what a cache operation did, independent of any transport.

use std::fmt;

use serde::Serialize;

// == Cache Outcome ==
/// Result classification of a cache operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheOutcome {
    /// Key present and fresh
    Hit,
    /// New key inserted
    Created,
    /// Existing key overwritten
    Updated,
    /// Key removed
    Deleted,
    /// Key absent
    Miss,
    /// Key present but past its TTL; removed on discovery
    Expired,
}

impl CacheOutcome {
    /// True for `Miss` and `Expired`.
    pub fn is_negative(self) -> bool {
        matches!(self, CacheOutcome::Miss | CacheOutcome::Expired)
    }
}

impl fmt::Display for CacheOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CacheOutcome::Hit => "hit",
            CacheOutcome::Created => "created",
            CacheOutcome::Updated => "updated",
            CacheOutcome::Deleted => "deleted",
            CacheOutcome::Miss => "miss",
            CacheOutcome::Expired => "expired",
        };
        f.write_str(name)
    }
}

// == Get Result ==
/// Value and outcome of a lookup. `value` is set only on a hit.
#[derive(Debug, Clone, PartialEq)]
pub struct GetResult<V> {
    pub value: Option<V>,
    pub outcome: CacheOutcome,
}

impl<V> GetResult<V> {
    pub fn hit(value: V) -> Self {
        Self {
            value: Some(value),
            outcome: CacheOutcome::Hit,
        }
    }

    pub fn miss() -> Self {
        Self {
            value: None,
            outcome: CacheOutcome::Miss,
        }
    }

    pub fn expired() -> Self {
        Self {
            value: None,
            outcome: CacheOutcome::Expired,
        }
    }
}
