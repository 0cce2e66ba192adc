//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Response,
    Json,
};
use serde_json::Value;

use crate::api::response::{outcome_response, outcome_response_with};
use crate::cache::{Cache, Clock, SystemClock};
use crate::config::Config;
use crate::error::Result;
use crate::models::{CacheStatsResponse, HealthResponse, ItemValueResponse, PutItemRequest};

/// Cache type served over HTTP: string keys, arbitrary JSON values.
pub type SharedCache = Cache<String, Value, Arc<dyn Clock>>;

/// Application state shared across all handlers.
///
/// Holds a handle to the one cache instance; cloning the state clones the
/// handle, not the cache.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache handle
    pub cache: SharedCache,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: SharedCache) -> Self {
        Self { cache }
    }

    /// Creates a new AppState with a fresh cache reading time from `clock`.
    pub fn with_clock(capacity: usize, clock: impl Clock + 'static) -> Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(clock);
        Ok(Self::new(Cache::with_clock(capacity, clock)?))
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured capacity is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_clock(config.cache_capacity, SystemClock)
    }
}

/// Handler for GET /v1/cache/:key
///
/// 200 with `{"value": ...}` on a hit, 404 with a message on miss or expiry.
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Response {
    let result = state.cache.get(&key);

    match result.value {
        Some(value) => outcome_response_with(result.outcome, ItemValueResponse::new(value)),
        None => outcome_response(result.outcome),
    }
}

/// Handler for PUT /v1/cache/:key
///
/// 201 when the key is new, 200 when it was overwritten. A non-positive TTL
/// or an unreadable body is rejected with 422 before the cache is touched.
pub async fn put_item_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    payload: std::result::Result<Json<PutItemRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(req) = payload?;
    let ttl = req.ttl_seconds()?;
    let outcome = state.cache.put(key, req.value, ttl)?;

    Ok(outcome_response(outcome))
}

/// Handler for DELETE /v1/cache/:key
///
/// 204 when the key was removed, 404 when it was not present.
pub async fn delete_item_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Response {
    outcome_response(state.cache.delete(&key))
}

/// Handler for GET /v1/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(state.cache.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
