//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_item_handler, get_item_handler, health_handler, put_item_handler, stats_handler,
    AppState,
};
use super::middleware::log_request_timing;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /v1/cache/stats` - Size, capacity and keys in recency order
/// - `GET /v1/cache/:key` - Retrieve a value by key
/// - `PUT /v1/cache/:key` - Store a value with optional TTL
/// - `DELETE /v1/cache/:key` - Delete a key
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Request timing: logs method, path, status and duration
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Per-request spans from tower-http
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/v1", v1_routes())
        .route("/health", get(health_handler))
        .layer(middleware::from_fn(log_request_timing))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn v1_routes() -> Router<AppState> {
    // Static segment wins over the `:key` capture, so "stats" is never a key
    // for GET.
    Router::new()
        .route("/cache/stats", get(stats_handler))
        .route(
            "/cache/:key",
            get(get_item_handler)
                .put(put_item_handler)
                .delete(delete_item_handler),
        )
}
