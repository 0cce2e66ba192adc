//! Cache Statistics Module
//!
//! Point-in-time snapshot of cache contents.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of the cache: size, capacity and keys in recency order.
///
/// The snapshot owns its keys; later cache operations do not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats<K> {
    /// Current number of entries, including expired ones not yet touched
    pub size: usize,
    /// Maximum number of entries
    pub capacity: usize,
    /// Keys from most to least recently used
    pub items: Vec<K>,
}

impl<K> CacheStats<K> {
    // == Constructor ==
    pub fn new(capacity: usize, items: Vec<K>) -> Self {
        Self {
            size: items.len(),
            capacity,
            items,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new(3, vec!["c", "b", "a"]);
        assert_eq!(stats.size, 3);
        assert_eq!(stats.capacity, 3);
        assert_eq!(stats.items.last(), Some(&"a"));
    }

    #[test]
    fn test_stats_empty() {
        let stats: CacheStats<String> = CacheStats::new(10, Vec::new());
        assert_eq!(stats.size, 0);
        assert!(stats.items.is_empty());
    }

    #[test]
    fn test_stats_serialize() {
        let stats = CacheStats::new(5, vec!["k2".to_string(), "k1".to_string()]);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"size": 2, "capacity": 5, "items": ["k2", "k1"]})
        );
    }
}
