//! Error types for the cache server
//!
//! Cache outcomes (hit, miss, expired, ...) are ordinary data and live in
//! [`crate::cache::CacheOutcome`]. Only construction failures and rejected
//! input are errors.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::MessageResponse;

// == Cache Error Enum ==
/// Unified error type for the cache engine and its HTTP boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity must be at least one entry
    #[error("Capacity must be greater than 0")]
    InvalidCapacity,

    /// TTL must be strictly positive
    #[error("TTL must be greater than 0")]
    InvalidTtl,

    /// Request rejected by boundary validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl CacheError {
    /// HTTP status used when this error reaches a client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CacheError::InvalidTtl | CacheError::InvalidRequest(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            CacheError::InvalidCapacity => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == Body Rejections ==
/// Malformed or mistyped request bodies surface as the same `{"message"}`
/// error as any other rejected input.
impl From<JsonRejection> for CacheError {
    fn from(rejection: JsonRejection) -> Self {
        CacheError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
