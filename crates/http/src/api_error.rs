//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use goal_lookup_service::ServiceError;

/// Message returned to clients when the dataset could not be loaded.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "failed to load goals";

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — missing or blank input.
    BadRequest(String),
    /// 404 Not Found — nothing matched.
    NotFound(String),
    /// 500 Internal Server Error — dataset fetch or parse failed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "failed to load goal dataset");
                (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE_MESSAGE.to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::Source(_) => Self::Internal(err.into()),
        }
    }
}
