//! Error conversion into HTTP responses.
//!
//! Every `ApiError` becomes one of the fixed envelope shapes. Internal
//! failures (datastore, token minting, hashing) are logged with their full
//! detail and answered with a generic message only - the raw error text
//! never reaches the client.

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::ApiError;
use crate::backend::response::Envelope;

/// Generic body for 500s.
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::NotFound { id, .. } => Envelope::not_found(id),
            ApiError::Storage(e) => {
                tracing::error!("database error: {e:?}");
                Envelope::failure(INTERNAL_ERROR_MESSAGE)
            }
            ApiError::Token(e) => {
                tracing::error!("failed to mint token: {e:?}");
                Envelope::failure(INTERNAL_ERROR_MESSAGE)
            }
            ApiError::Hash(e) => {
                tracing::error!("password hashing failed: {e:?}");
                Envelope::failure(INTERNAL_ERROR_MESSAGE)
            }
            ApiError::Io(e) => {
                tracing::error!("filesystem error: {e:?}");
                Envelope::failure(INTERNAL_ERROR_MESSAGE)
            }
            other => Envelope::failure(other.to_string()),
        };

        (status, Json(body)).into_response()
    }
}
