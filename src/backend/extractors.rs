//! Request Extractors
//!
//! `Payload<T>` wraps `axum::Json<T>` so that malformed JSON, wrong
//! content types and payloads that fail deserialization (missing required
//! fields, unknown fields on patch bodies) all come back as the uniform
//! 400 validation envelope instead of axum's plain-text rejection.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::backend::error::ApiError;

/// JSON payload extractor with envelope-shaped rejections.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;
        Ok(Payload(value))
    }
}
