//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use netinv_domain::error::InventoryError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`InventoryError`] to an HTTP response with appropriate status code.
pub struct ApiError(InventoryError);

impl ApiError {
    /// Status code and client-facing message for this error.
    #[must_use]
    pub fn parts(&self) -> (StatusCode, String) {
        status_and_message(&self.0)
    }
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        Self(err)
    }
}

/// Translate a domain error into a status code and message.
///
/// Storage failures are logged and their message is passed through as-is.
pub(crate) fn status_and_message(err: &InventoryError) -> (StatusCode, String) {
    match err {
        InventoryError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        InventoryError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
        InventoryError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        InventoryError::Storage(err) => {
            tracing::error!(error = %err, "storage error");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.parts();
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
