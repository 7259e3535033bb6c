//! Token Issuer
//!
//! Mints signed, time-limited session tokens on successful login. Tokens
//! are HS256 JWTs carrying the subject's user id and email plus an absolute
//! expiry (issuance time + 1 hour). Sessions are stateless: nothing is kept
//! server-side after minting, and the request guard re-verifies signature
//! and expiry on every call.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Session token lifetime in seconds.
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// JWT claims.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    /// Email of the subject.
    pub email: String,
    /// Expiration time (Unix timestamp).
    pub exp: u64,
    /// Issued at (Unix timestamp).
    pub iat: u64,
}

/// Symmetric signing key, shared with the verifying request guard.
fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development default");
        "inkpost-dev-secret-change-in-production".to_string()
    })
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Mint a session token for a user.
pub fn create_token(user_id: i64, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = now_unix();
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: iat + TOKEN_TTL_SECS,
        iat,
    };

    let key = EncodingKey::from_secret(jwt_secret().as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token.
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(jwt_secret().as_ref());
    let token_data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        let token = create_token(7, "test@example.com").unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.email, "test@example.com");
    }

    #[test]
    fn test_expiry_is_one_hour_after_issuance() {
        let token = create_token(1, "a@b.c").unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(verify_token("not.a.token").is_err());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let token = create_token(1, "a@b.c").unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        parts[2] = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
        let forged = parts.join(".");
        assert!(verify_token(&forged).is_err());
    }
}
