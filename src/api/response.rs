//! Outcome Responses
//!
//! Maps cache outcomes to HTTP status codes and bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::cache::CacheOutcome;
use crate::models::MessageResponse;

/// HTTP status for each outcome.
pub fn status_code(outcome: CacheOutcome) -> StatusCode {
    match outcome {
        CacheOutcome::Hit | CacheOutcome::Updated => StatusCode::OK,
        CacheOutcome::Created => StatusCode::CREATED,
        CacheOutcome::Deleted => StatusCode::NO_CONTENT,
        CacheOutcome::Miss | CacheOutcome::Expired => StatusCode::NOT_FOUND,
    }
}

/// Client-facing description of each outcome.
pub fn message(outcome: CacheOutcome) -> &'static str {
    match outcome {
        CacheOutcome::Hit => "OK",
        CacheOutcome::Created => "Cache item created",
        CacheOutcome::Updated => "Cache item updated",
        CacheOutcome::Deleted => "Cache item deleted",
        CacheOutcome::Miss => "Cache item not found",
        CacheOutcome::Expired => "Cache item expired",
    }
}

/// Bodyless response for positive outcomes; `{"message": ...}` for negative ones.
pub fn outcome_response(outcome: CacheOutcome) -> Response {
    if outcome.is_negative() {
        return negative_response(outcome);
    }
    status_code(outcome).into_response()
}

/// Like [`outcome_response`] but positive outcomes carry `body`.
pub fn outcome_response_with<T: Serialize>(outcome: CacheOutcome, body: T) -> Response {
    if outcome.is_negative() {
        return negative_response(outcome);
    }
    (status_code(outcome), Json(body)).into_response()
}

fn negative_response(outcome: CacheOutcome) -> Response {
    (
        status_code(outcome),
        Json(MessageResponse::new(message(outcome))),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (CacheOutcome::Hit, StatusCode::OK),
            (CacheOutcome::Created, StatusCode::CREATED),
            (CacheOutcome::Updated, StatusCode::OK),
            (CacheOutcome::Deleted, StatusCode::NO_CONTENT),
            (CacheOutcome::Miss, StatusCode::NOT_FOUND),
            (CacheOutcome::Expired, StatusCode::NOT_FOUND),
        ];
        for (outcome, expected) in cases {
            assert_eq!(status_code(outcome), expected, "{outcome}");
        }
    }

    #[test]
    fn test_negative_messages_are_distinct() {
        assert_ne!(message(CacheOutcome::Miss), message(CacheOutcome::Expired));
    }

    #[tokio::test]
    async fn test_negative_outcome_has_message_body() {
        let response = outcome_response_with(CacheOutcome::Expired, json!({"value": 1}));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Cache item expired"})
        );
    }

    #[tokio::test]
    async fn test_positive_outcome_without_body_is_empty() {
        let response = outcome_response(CacheOutcome::Created);
        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_positive_outcome_with_body() {
        let response = outcome_response_with(CacheOutcome::Hit, json!({"value": "v"}));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"value": "v"}));
    }
}
