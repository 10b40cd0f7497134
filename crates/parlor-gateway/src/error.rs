// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping from [`ParlorError`] to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use parlor_core::ParlorError;
use serde::Serialize;

/// JSON error body returned by all failing endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error description.
    pub error: String,
}

/// Newtype so `?` works in handlers returning axum responses.
pub struct ApiError(pub ParlorError);

impl From<ParlorError> for ApiError {
    fn from(err: ParlorError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ParlorError::Conflict(_) => (StatusCode::CONFLICT, self.0.to_string()),
            ParlorError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, self.0.to_string()),
            ParlorError::NotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            ParlorError::Validation(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            ParlorError::Storage { .. } | ParlorError::Config(_) | ParlorError::Internal(_) => {
                // Internals stay in the log, not in the response body.
                tracing::error!(error = %self.0, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
