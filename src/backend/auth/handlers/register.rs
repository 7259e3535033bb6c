//! Registration handler for POST /register.

use axum::{extract::State, Json};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::CredentialsRequest;
use crate::backend::auth::users;
use crate::backend::error::ApiError;
use crate::backend::extractors::Payload;
use crate::backend::response::Envelope;

pub async fn register(
    State(pool): State<PgPool>,
    Payload(request): Payload<CredentialsRequest>,
) -> Result<Json<Envelope>, ApiError> {
    request.validate()?;

    let user_id = users::create(&pool, &request.email, &request.password).await?;

    tracing::info!("registered user {}", user_id);

    Ok(Json(Envelope::ok("User registration successful.")))
}
