//! Response Envelope
//!
//! The single shared contract every endpoint honors: a JSON body with a
//! `success` flag and a human-readable `message`, plus a small set of
//! optional fields (`token` on successful login, `thumbnail` on post
//! creation, `resource_id` on 404s) that are omitted entirely when absent.
//!
//! Resource reads (GET on posts/categories) return the resource itself on
//! success; everything else - and every error - goes through this envelope.

use serde::Serialize;

/// Body text used by every 404 envelope.
pub const NOT_FOUND_MESSAGE: &str = "Resource not found with this ID.";

/// Uniform JSON envelope.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl Envelope {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            token: None,
            thumbnail: None,
            resource_id: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::ok(message)
        }
    }

    /// Successful login: the minted session token rides along.
    pub fn with_token(message: impl Into<String>, token: String) -> Self {
        Self {
            token: Some(token),
            ..Self::ok(message)
        }
    }

    /// Successful post creation: the stored thumbnail URL rides along.
    pub fn with_thumbnail(message: impl Into<String>, thumbnail: String) -> Self {
        Self {
            thumbnail: Some(thumbnail),
            ..Self::ok(message)
        }
    }

    /// Not-found shape; echoes the requested id or slug back to the caller.
    pub fn not_found(id: impl ToString) -> Self {
        Self {
            resource_id: Some(id.to_string()),
            ..Self::failure(NOT_FOUND_MESSAGE)
        }
    }
}
