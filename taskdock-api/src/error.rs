//! Error handling for the API server
//!
//! This module provides a unified error type that maps to HTTP responses.
//! Handlers return `Result<T, ApiError>` which automatically converts to
//! the appropriate status code, and the data layer's domain errors
//! translate via `From`:
//!
//! - `Validation` → 400 Bad Request
//! - `NotFound` → 404 Not Found
//! - `Conflict` → 409 Conflict
//! - `Store` → 500 Internal Server Error (detail logged, not exposed)
//!
//! Clients can use the split to decide whether retrying makes sense:
//! 4xx responses are caller fault, 5xx are system fault.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use taskdock_shared::error::ModelError;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400)
    BadRequest(String),

    /// Not found (404)
    NotFound(String),

    /// Conflict (409) - e.g., duplicate email
    Conflict(String),

    /// Internal server error (500)
    InternalError(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "bad_request", "not_found")
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Convert data-layer errors to API errors
impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation(msg) => ApiError::BadRequest(msg),
            ModelError::NotFound(msg) => ApiError::NotFound(msg),
            ModelError::Conflict(msg) => ApiError::Conflict(msg),
            ModelError::Store(e) => ApiError::InternalError(format!("Store error: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("Invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: Invalid input");

        let err = ApiError::NotFound("User not found".to_string());
        assert_eq!(err.to_string(), "Not found: User not found");
    }

    #[test]
    fn test_model_error_mapping() {
        let err: ApiError = ModelError::Validation("title is required".to_string()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err: ApiError = ModelError::NotFound("task 1".to_string()).into();
        assert!(matches!(err, ApiError::NotFound(_)));

        let err: ApiError = ModelError::Conflict("email already exists".to_string()).into();
        assert!(matches!(err, ApiError::Conflict(_)));

        let err: ApiError = ModelError::Store(sqlx::Error::PoolClosed).into();
        assert!(matches!(err, ApiError::InternalError(_)));
    }
}
