//! Authentication guard.
//!
//! Protects every route except /login and /register. Extracts the bearer
//! token from the Authorization header, verifies signature and expiry, and
//! attaches the authenticated user to the request extensions. Verification
//! is purely cryptographic - sessions are stateless, so there is no
//! database lookup here.

use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::sessions::verify_token;
use crate::backend::response::Envelope;

/// User identity recovered from a verified session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
}

pub async fn require_auth(mut request: Request, next: Next) -> Response {
    match authenticate(&request) {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(message) => {
            tracing::warn!("rejected request: {}", message);
            (
                StatusCode::UNAUTHORIZED,
                Json(Envelope::failure("Missing or invalid authorization token.")),
            )
                .into_response()
        }
    }
}

fn authenticate(request: &Request) -> Result<AuthenticatedUser, &'static str> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = bearer_token(header).ok_or("missing bearer token")?;

    let claims = verify_token(token).map_err(|_| "token verification failed")?;

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| "malformed subject claim")?;

    Ok(AuthenticatedUser {
        user_id,
        email: claims.email,
    })
}

/// Pull the token out of a `Bearer <token>` header value.
fn bearer_token(header: Option<&str>) -> Option<&str> {
    header?.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}
