//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use uploadhub_core::error::{AppError, ErrorKind};

use crate::dto::response::ErrorResponse;

/// Wrapper carrying a domain [`AppError`] across the HTTP boundary.
///
/// Handlers return `Result<_, ApiError>`; the `?` operator converts any
/// `AppError` via `From`, and this type renders the status + stable JSON
/// error body.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, message) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, err.message),
            ErrorKind::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, err.message),
            // Storage, configuration, and internal faults all surface as a
            // generic 500: the underlying message may contain paths.
            ErrorKind::Storage | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ErrorResponse { error: message };
        (status, Json(body)).into_response()
    }
}
