//! Error types for the story cache service
//!
//! Provides unified error handling using thiserror.
//!
//! Upstream unavailability is deliberately not represented here: list and
//! search callers receive fewer (or zero) results instead of an error. The
//! only hard failures are malformed story data and malformed requests.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Service Error Enum ==
/// Unified error type for the story cache service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Story constructed with an empty or whitespace-only title
    #[error("Title cannot be empty")]
    EmptyTitle,

    /// Story constructed with a URL that is not an absolute URL
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    /// Requested story does not exist upstream
    #[error("Story not found: {0}")]
    StoryNotFound(u64),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::EmptyTitle => StatusCode::BAD_REQUEST,
            ServiceError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            ServiceError::StoryNotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the story cache service.
pub type Result<T> = std::result::Result<T, ServiceError>;

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = vec![
            (ServiceError::EmptyTitle, StatusCode::BAD_REQUEST),
            (
                ServiceError::InvalidUrl("invalid-url".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (ServiceError::StoryNotFound(42), StatusCode::NOT_FOUND),
            (
                ServiceError::InvalidRequest("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ServiceError::EmptyTitle.to_string(), "Title cannot be empty");
        assert_eq!(
            ServiceError::StoryNotFound(7).to_string(),
            "Story not found: 7"
        );
    }
}
