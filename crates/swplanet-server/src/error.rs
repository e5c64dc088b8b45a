//! Mapping from service errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use swplanet_core::Error;

use crate::types::ErrorResponse;

/// Service error on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self(Error::Storage(format!("Blocking task failed: {err}")))
    }
}

impl ApiError {
    /// Status code for the wrapped error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self.0 {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Storage(_) | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = if self.0.is_client_error() {
            self.0.to_string()
        } else {
            // Storage detail stays in the logs.
            tracing::error!(error = %self.0, "Request failed");
            "Internal server error".to_string()
        };

        (
            status,
            Json(ErrorResponse {
                error,
                code: self.0.code().to_string(),
            }),
        )
            .into_response()
    }
}

/// 404 for lookups that found nothing.
pub fn not_found(message: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: message,
            code: "SWP-003".to_string(),
        }),
    )
        .into_response()
}
