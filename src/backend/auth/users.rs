//! Credential Store
//!
//! Persists user email/password-hash pairs and verifies login attempts.
//! Only the bcrypt hash ever touches the database; verification uses
//! bcrypt's constant-time comparison. A failed login reports the same
//! `Credentials` error whether the email is unknown or the password is
//! wrong, so responses never reveal which emails are registered.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::backend::blog::exists::email_taken;
use crate::backend::error::ApiError;

/// A user row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Verify a login attempt, returning the user id on success.
pub async fn verify(pool: &PgPool, email: &str, password: &str) -> Result<i64, ApiError> {
    let user = get_user_by_email(pool, email).await?;

    let user = user.ok_or(ApiError::Credentials)?;

    if bcrypt::verify(password, &user.password_hash)? {
        Ok(user.id)
    } else {
        Err(ApiError::Credentials)
    }
}

/// Register a new user, returning the generated id.
///
/// The email is probed first so a duplicate gets a friendly conflict
/// message; the unique index still backs this up, and a violation raised by
/// a concurrent registration between probe and insert is mapped to the same
/// conflict instead of a 500.
pub async fn create(pool: &PgPool, email: &str, password: &str) -> Result<i64, ApiError> {
    if email_taken(pool, email).await? {
        return Err(ApiError::conflict("Email already registered"));
    }

    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    let row: (i64,) = sqlx::query_as(
        r#"
        INSERT INTO users (email, password_hash)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ApiError::from_write_error(e, "Email already registered"))?;

    Ok(row.0)
}

/// Look a user up by email.
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}
