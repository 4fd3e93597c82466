/**
 * User Handlers
 *
 * HTTP handlers for the `/v1/users` routes: registration, email
 * verification, login, logout, token refresh, and account updates.
 *
 * # Session Cookies
 *
 * Login sets both token cookies; refresh replaces the access cookie;
 * logout clears both. The tokens are also included in the login body so
 * non-browser clients can manage them without cookies.
 */

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse, Json},
};

use crate::auth::{
    auth_cookie, clear_cookie, get_cookie, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE,
};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::providers::media::read_upload;
use crate::server::state::AppState;
use crate::users::service;
use crate::users::types::{
    LoginRequest, LogoutResponse, PublicUser, RefreshResponse, RegisterRequest, UpdateUserRequest,
    VerifyRequest,
};
use crate::validation::Validate;

/// Handle `POST /v1/users/register`
///
/// # Arguments
///
/// * `State(app_state)` - Application state
/// * `Json(request)` - Email and password for the new account
///
/// # Returns
///
/// `201 Created` with the sanitized user, or an error status
pub async fn register(
    State(app_state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("Register request for email: {}", request.email);
    request.validate()?;

    let user = service::register(
        &app_state.store,
        &app_state.mailer,
        &app_state.config,
        request,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Handle `PUT /v1/users/verify`
pub async fn verify_account(
    State(app_state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<PublicUser>, ApiError> {
    tracing::info!("Verify request for email: {}", request.email);
    request.validate()?;

    let user = service::verify_account(&app_state.store, request).await?;

    Ok(Json(user))
}

/// Handle `POST /v1/users/login`
///
/// On success, sets both session cookies and returns the user with the
/// tokens in the body.
pub async fn login(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("Login request for email: {}", request.email);
    request.validate()?;

    let response = service::login(&app_state.store, &app_state.config, request).await?;

    let cookies = AppendHeaders([
        (
            header::SET_COOKIE,
            auth_cookie(ACCESS_TOKEN_COOKIE, &response.access_token),
        ),
        (
            header::SET_COOKIE,
            auth_cookie(REFRESH_TOKEN_COOKIE, &response.refresh_token),
        ),
    ]);

    Ok((cookies, Json(response)))
}

/// Handle `GET /v1/users/refresh_token`
///
/// Reads the refresh cookie, mints a new access token, and replaces the
/// access cookie. Any failure means the client must sign in again.
pub async fn refresh_token(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let refresh_token = get_cookie(&headers, REFRESH_TOKEN_COOKIE)
        .ok_or_else(|| ApiError::forbidden("Please Sign In! (Error from refresh Token)"))?;

    let access_token = service::refresh(&app_state.config, &refresh_token)?;

    let cookies = AppendHeaders([(
        header::SET_COOKIE,
        auth_cookie(ACCESS_TOKEN_COOKIE, &access_token),
    )]);

    Ok((cookies, Json(RefreshResponse { access_token })))
}

/// Handle `DELETE /v1/users/logout`
pub async fn logout() -> impl IntoResponse {
    let cookies = AppendHeaders([
        (header::SET_COOKIE, clear_cookie(ACCESS_TOKEN_COOKIE)),
        (header::SET_COOKIE, clear_cookie(REFRESH_TOKEN_COOKIE)),
    ]);

    (cookies, Json(LogoutResponse { logged_out: true }))
}

/// Handle `PUT /v1/users/update`
///
/// Accepts either a JSON body (password or display name change) or a
/// multipart body with an `avatar` file field.
pub async fn update(
    State(app_state): State<AppState>,
    AuthUser(current_user): AuthUser,
    request: Request,
) -> Result<Json<PublicUser>, ApiError> {
    tracing::info!("Account update request from user: {}", current_user.id);

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    let (body, avatar) = if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(request, &app_state)
            .await
            .map_err(|e| {
                tracing::warn!("Invalid multipart request: {:?}", e);
                ApiError::validation("Invalid multipart request")
            })?;
        let avatar = read_upload(&mut multipart, "avatar").await?;
        (UpdateUserRequest::default(), avatar)
    } else {
        let Json(body) = Json::<UpdateUserRequest>::from_request(request, &app_state)
            .await
            .map_err(|e| {
                tracing::warn!("Invalid account update body: {:?}", e);
                ApiError::validation("Invalid request body")
            })?;
        (body, None)
    };

    body.validate()?;

    let updated = service::update(
        &app_state.store,
        &app_state.media,
        current_user.id,
        body,
        avatar,
    )
    .await?;

    Ok(Json(updated))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logout_clears_both_cookies() {
        let response = logout().await.into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let cookies: Vec<_> = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect();

        assert_eq!(cookies.len(), 2);
        assert!(cookies.iter().any(|c| c.starts_with("accessToken=;")));
        assert!(cookies.iter().any(|c| c.starts_with("refreshToken=;")));
        assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
    }
}
