//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::error::CacheError;

/// Request body for `PUT /v1/cache/:key`
///
/// # Fields
/// - `value`: Any JSON value, stored as-is
/// - `ttl`: Optional TTL in seconds; must be positive when present
#[derive(Debug, Clone, Deserialize)]
pub struct PutItemRequest {
    /// The value to store
    pub value: Value,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<i64>,
}

impl PutItemRequest {
    /// Validates the request and returns the TTL in the engine's unit.
    pub fn ttl_seconds(&self) -> Result<Option<u64>, CacheError> {
        match self.ttl {
            None => Ok(None),
            Some(ttl) if ttl > 0 => Ok(Some(ttl as u64)),
            Some(ttl) => Err(CacheError::InvalidRequest(format!(
                "ttl must be greater than 0, got {}",
                ttl
            ))),
        }
    }
}
