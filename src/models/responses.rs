//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;

/// Response body for a cache hit (`GET /v1/cache/:key`)
#[derive(Debug, Clone, Serialize)]
pub struct ItemValueResponse {
    /// The stored value
    pub value: Value,
}

impl ItemValueResponse {
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

/// Response body for the stats endpoint (`GET /v1/cache/stats`)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    /// Current number of entries in cache
    pub size: usize,
    /// Maximum number of entries
    pub capacity: usize,
    /// Keys, most recently used first
    pub items: Vec<String>,
}

impl From<CacheStats<String>> for CacheStatsResponse {
    fn from(stats: CacheStats<String>) -> Self {
        Self {
            size: stats.size,
            capacity: stats.capacity,
            items: stats.items,
        }
    }
}

/// Body for negative outcomes and rejected requests
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Human-readable description
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the health endpoint (`GET /health`)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
