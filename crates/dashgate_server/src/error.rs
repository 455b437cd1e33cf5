//! Error-to-response conversion for the gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dashgate_error::DashGateError;
use tracing::error;

/// Wrapper converting gateway errors into HTTP responses.
///
/// The gateway performs no recovery: any upstream failure surfaces as a
/// generic server error carrying the error display.
#[derive(Debug)]
pub struct ApiError(DashGateError);

impl From<DashGateError> for ApiError {
    fn from(err: DashGateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}
