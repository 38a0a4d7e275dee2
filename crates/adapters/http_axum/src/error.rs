//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use flatshop_domain::error::{FlatshopError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`FlatshopError`] to an HTTP response with appropriate status code.
pub struct ApiError(FlatshopError);

impl From<FlatshopError> for ApiError {
    fn from(err: FlatshopError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedPayload(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            // An unparsable path id counts as a storage failure, never as a
            // bad request or a miss.
            FlatshopError::Validation(err @ ValidationError::InvalidId { .. }) => {
                tracing::error!(error = %err, "storage rejected id");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            FlatshopError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            FlatshopError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            FlatshopError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
