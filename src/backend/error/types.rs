//! Error type definitions.

use axum::http::StatusCode;
use thiserror::Error;

/// All error outcomes a handler can produce.
///
/// Each variant maps to exactly one of the fixed response shapes:
/// validation failures are 400, credential failures 401, duplicate unique
/// keys 400, missing resources 404 and everything unexpected 500.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed JSON or missing/invalid required fields.
    #[error("{0}")]
    Validation(String),

    /// Login mismatch. Deliberately carries no detail so the response never
    /// reveals whether the email exists.
    #[error("Your login credentials are invalid.")]
    Credentials,

    /// Duplicate unique key (e.g. an already registered email).
    #[error("{0}")]
    Conflict(String),

    /// Missing resource id or slug. The requested key is echoed back in the
    /// response body.
    #[error("Resource not found with this ID.")]
    NotFound { resource: &'static str, id: String },

    /// Unexpected datastore failure.
    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Token minting failure.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure.
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Filesystem failure (thumbnail storage).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Postgres SQLSTATE for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";
/// Postgres SQLSTATE for foreign key violations.
const FOREIGN_KEY_VIOLATION: &str = "23503";

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Classify a datastore error raised by a write: unique violations are
    /// conflicts, foreign-key violations are validation failures (the
    /// payload referenced a row that does not exist), anything else is an
    /// unexpected storage failure.
    pub fn from_write_error(e: sqlx::Error, conflict_message: &'static str) -> Self {
        if let sqlx::Error::Database(db) = &e {
            match db.code().as_deref() {
                Some(UNIQUE_VIOLATION) => return Self::conflict(conflict_message),
                Some(FOREIGN_KEY_VIOLATION) => {
                    return Self::validation("One or more referenced category ids do not exist.")
                }
                _ => {}
            }
        }
        Self::Storage(e)
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Credentials => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Token(_) | Self::Hash(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Credentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::conflict("taken").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::not_found("post", 7).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Storage(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_credentials_message_is_fixed() {
        assert_eq!(
            ApiError::Credentials.to_string(),
            "Your login credentials are invalid."
        );
    }

    #[test]
    fn test_not_found_keeps_requested_id() {
        match ApiError::not_found("category", 42) {
            ApiError::NotFound { resource, id } => {
                assert_eq!(resource, "category");
                assert_eq!(id, "42");
            }
            _ => panic!("expected NotFound"),
        }
    }
}
