/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies the JWT access token
 * from the `accessToken` cookie and attaches the caller's identity to
 * the request for handlers to pick up.
 */

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use bson::oid::ObjectId;
use jsonwebtoken::errors::ErrorKind;

use crate::auth::{get_cookie, verify_token, ACCESS_TOKEN_COOKIE};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data extracted from the access token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: ObjectId,
    pub email: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Reads the access token from the `accessToken` cookie
/// 2. Verifies the token signature and expiry
/// 3. Attaches the user's id and email to request extensions
///
/// An expired token gets a dedicated 410 Gone so the client knows to
/// call the refresh endpoint instead of redirecting to sign-in.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = get_cookie(request.headers(), ACCESS_TOKEN_COOKIE).ok_or_else(|| {
        tracing::warn!("Missing access token cookie");
        ApiError::unauthorized("Unauthorized! (token not found)")
    })?;

    let claims = verify_token(&token, &app_state.config.access_token_secret).map_err(|e| {
        if matches!(e.kind(), ErrorKind::ExpiredSignature) {
            ApiError::token_expired("Need to refresh token!")
        } else {
            tracing::warn!("Invalid access token: {:?}", e);
            ApiError::unauthorized("Unauthorized!")
        }
    })?;

    let user_id = ObjectId::parse_str(&claims.id).map_err(|e| {
        tracing::warn!("Invalid user id in token claims: {:?}", e);
        ApiError::unauthorized("Unauthorized!")
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        id: user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter on routes behind [`auth_middleware`] to
/// get the caller's identity without touching request extensions by hand.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthorized("Unauthorized!")
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn test_extensions_round_trip() {
        let mut request = Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();

        let user = AuthenticatedUser {
            id: ObjectId::new(),
            email: "test@example.com".to_string(),
        };
        request.extensions_mut().insert(user.clone());

        let extracted = request.extensions().get::<AuthenticatedUser>().cloned();
        assert_eq!(extracted.map(|u| u.id), Some(user.id));
    }
}
