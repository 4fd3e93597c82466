/**
 * Router Configuration
 *
 * Assembles the final router: the `/v1` API table, the CORS layer built
 * from the configured origin whitelist, the request body limit, and a
 * JSON 404 fallback.
 */

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::ApiError;
use crate::routes::api_routes::configure_api_routes;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Request body cap: the 10 MB upload limit plus multipart overhead
const MAX_BODY_SIZE_BYTES: usize = 12 * 1024 * 1024;

/// CORS layer from the configured origin whitelist
///
/// Credentials are allowed because the session rides on cookies, which
/// also rules out a wildcard origin. Origins that fail header parsing
/// are skipped with a warning.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = Vec::new();
    for origin in &config.cors_whitelist {
        match origin.parse() {
            Ok(value) => origins.push(value),
            Err(_) => tracing::warn!("Ignoring invalid CORS origin: {}", origin),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Fallback for unmatched routes
async fn fallback_handler() -> ApiError {
    ApiError::not_found("Route not found!")
}

/// Create the router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state shared by every handler
///
/// # Returns
///
/// Configured router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = cors_layer(&app_state.config);

    Router::new()
        .nest("/v1", configure_api_routes(app_state.clone()))
        .fallback(fallback_handler)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE_BYTES))
        .layer(cors)
        .with_state(app_state)
}
