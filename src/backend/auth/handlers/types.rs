//! Request types shared by the login and register handlers.

use serde::Deserialize;

use crate::backend::error::ApiError;

/// Body of POST /login and POST /register.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

impl CredentialsRequest {
    /// Basic field validation: email must look like an email, password must
    /// be present. Deeper policy (length, charset) is not part of this
    /// service's contract.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(ApiError::validation("A valid email address is required."));
        }
        if self.password.is_empty() {
            return Err(ApiError::validation("A password is required."));
        }
        Ok(())
    }
}
