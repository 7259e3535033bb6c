//! Login handler for POST /login.
//!
//! Verifies the email/password pair against the credential store and mints
//! a one-hour session token on success. Invalid credentials always answer
//! 401 with the same body, whether the email exists or not.

use axum::{extract::State, Json};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::CredentialsRequest;
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users;
use crate::backend::error::ApiError;
use crate::backend::extractors::Payload;
use crate::backend::response::Envelope;

pub async fn login(
    State(pool): State<PgPool>,
    Payload(request): Payload<CredentialsRequest>,
) -> Result<Json<Envelope>, ApiError> {
    request.validate()?;

    let user_id = users::verify(&pool, &request.email, &request.password).await?;

    let token = create_token(user_id, &request.email)?;

    tracing::info!("user {} logged in", user_id);

    Ok(Json(Envelope::with_token(
        "You've logged in successfully.",
        token,
    )))
}
