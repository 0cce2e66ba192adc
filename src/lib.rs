//! LRU TTL Cache - A thread-safe in-memory key-value cache
//!
//! Bounded by entry count with least-recently-used eviction and lazily
//! checked per-entry TTLs, served over a small HTTP API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

pub use api::{create_router, AppState};
pub use cache::{Cache, CacheOutcome, CacheStats, CacheStore, GetResult};
pub use config::Config;
pub use error::CacheError;
