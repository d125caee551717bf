use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use stayhub_core::error::BookingError;

/// API error type that maps to JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Validation(err) => ApiError::BadRequest(err.to_string()),
            err @ BookingError::NotFound { .. } => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Streamed bodies hit the size limit while the extractor buffers them
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "notFound", msg),
            ApiError::BadRequest(msg) => {
                tracing::warn!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, "badRequest", msg)
            }
            ApiError::PayloadTooLarge(msg) => {
                tracing::warn!("Rejected oversized request: {msg}");
                (StatusCode::PAYLOAD_TOO_LARGE, "payloadTooLarge", msg)
            }
        };

        let body = json!({
            "error": {
                "type": error_type,
                "message": message,
                "statusCode": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Convenience type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;
