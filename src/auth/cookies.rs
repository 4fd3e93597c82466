/**
 * Session Cookies
 *
 * This module builds and parses the cookies carrying the session tokens.
 * Both tokens travel as `HttpOnly; Secure; SameSite=None` cookies with a
 * 14-day lifetime: the browser holds the expired access token until the
 * refresh endpoint replaces it, so the cookie must outlive the token.
 */

use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};

/// Cookie carrying the short-lived access token
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
/// Cookie carrying the long-lived refresh token
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Cookie lifetime in seconds (14 days, matching the refresh token)
pub const COOKIE_MAX_AGE_SECS: i64 = 14 * 24 * 60 * 60;

/// Build a `Set-Cookie` value for a session token
///
/// # Arguments
///
/// * `name` - Cookie name ([`ACCESS_TOKEN_COOKIE`] or [`REFRESH_TOKEN_COOKIE`])
/// * `value` - The signed JWT
pub fn auth_cookie(name: &str, value: &str) -> String {
    let expires = (Utc::now() + Duration::seconds(COOKIE_MAX_AGE_SECS))
        .format("%a, %d %b %Y %H:%M:%S GMT");
    format!(
        "{name}={value}; Max-Age={COOKIE_MAX_AGE_SECS}; Path=/; Expires={expires}; HttpOnly; Secure; SameSite=None"
    )
}

/// Build a `Set-Cookie` value that removes a session cookie
pub fn clear_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=0; Path=/; HttpOnly; Secure; SameSite=None")
}

/// Read a cookie value from the request headers
///
/// Scans every `Cookie` header for `name=value` pairs. Returns `None` when
/// the cookie is absent or the header is not valid UTF-8.
pub fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
        .next()
}
