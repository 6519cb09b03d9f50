use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::seating::SeatingError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Seating(#[from] SeatingError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::MalformedRequest(_) => (StatusCode::BAD_REQUEST, "MALFORMED_REQUEST"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Seating(e) => match e {
                SeatingError::InvalidConfiguration(_) => {
                    (StatusCode::BAD_REQUEST, "INVALID_CONFIGURATION")
                }
                SeatingError::OutOfBounds { .. } => (StatusCode::BAD_REQUEST, "OUT_OF_BOUNDS"),
                SeatingError::AlreadyReserved { .. } => (StatusCode::CONFLICT, "ALREADY_RESERVED"),
                SeatingError::NotReserved { .. } => (StatusCode::CONFLICT, "NOT_RESERVED"),
            },
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let message = match &self {
            AppError::Internal(_) => "An internal server error occurred".to_string(),
            other => {
                tracing::debug!(code, "Request rejected: {}", other);
                other.to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
