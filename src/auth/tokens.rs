/**
 * Session Tokens
 *
 * This module handles JWT generation and validation for user sessions.
 * Two token kinds share one claims shape and one pair of helpers; callers
 * pick the secret and lifetime. Access tokens are short-lived and checked
 * on every protected request; refresh tokens are long-lived and only ever
 * checked by the refresh endpoint.
 */

use bson::oid::ObjectId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Access token lifetime: 1 hour
pub const ACCESS_TOKEN_LIFE_SECS: u64 = 60 * 60;
/// Refresh token lifetime: 14 days
pub const REFRESH_TOKEN_LIFE_SECS: u64 = 14 * 24 * 60 * 60;

/// JWT claims structure
///
/// The `_id`/`email` pair is everything downstream handlers need; the
/// store is not consulted during token verification.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id (24-char hex)
    #[serde(rename = "_id")]
    pub id: String,
    /// Email
    pub email: String,
    /// Issued at time (Unix timestamp, seconds)
    pub iat: u64,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: u64,
}

/// Create a signed JWT for a user
///
/// # Arguments
/// * `user_id` - User id embedded as `_id`
/// * `email` - User email
/// * `secret` - HMAC secret (access or refresh)
/// * `life_secs` - Token lifetime in seconds
///
/// # Returns
/// JWT token string
pub fn create_token(
    user_id: ObjectId,
    email: &str,
    secret: &str,
    life_secs: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let claims = Claims {
        id: user_id.to_hex(),
        email: email.to_string(),
        iat: now,
        exp: now + life_secs,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a JWT
///
/// # Arguments
/// * `token` - JWT token string
/// * `secret` - HMAC secret the token must have been signed with
///
/// # Returns
/// Decoded claims, or an error whose kind distinguishes expiry
/// (`ErrorKind::ExpiredSignature`) from every other failure
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
