//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `GET /v1/cache/stats` - Cache statistics
//! - `GET /v1/cache/:key` - Retrieve a value by key
//! - `PUT /v1/cache/:key` - Store a value
//! - `DELETE /v1/cache/:key` - Delete a key
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
