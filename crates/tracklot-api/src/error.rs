//! Tracklot — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracklot_core::error::TrackingError;

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Fixed, caller-facing error message. Internal detail never appears
    /// here; storage failures are logged server-side only.
    pub error: &'static str,
}

/// HTTP-layer wrapper around `TrackingError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub TrackingError);

impl From<TrackingError> for ApiError {
    fn from(err: TrackingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self.0 {
            TrackingError::Validation(detail) => {
                // Client error, not a server fault.
                tracing::debug!(%detail, "rejected analytics envelope");
                (StatusCode::BAD_REQUEST, "Missing required fields")
            }
            TrackingError::Storage(detail) => {
                tracing::error!(%detail, "failed to persist analytics event");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to track analytics")
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
