/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: state creation, provider construction, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Wrap the loaded configuration in an `Arc`
 * 2. Build the outbound providers (mailer, media store)
 * 3. Assemble `AppState`
 * 4. Create and configure the router
 *
 * The MongoDB connection is established by the caller before this point,
 * so a bad `MONGODB_URI` fails the process at startup instead of on the
 * first request.
 */

use axum::Router;
use std::sync::Arc;

use crate::providers::email::Mailer;
use crate::providers::media::MediaStore;
use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;
use crate::store::Store;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `store` - Connected MongoDB store
/// * `config` - Configuration loaded from the environment
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(store: Store, config: AppConfig) -> Router<()> {
    tracing::info!("Initializing Taskboard API server");

    let config = Arc::new(config);
    let mailer = Mailer::new(&config);
    let media = MediaStore::new(&config);

    let app_state = AppState {
        store,
        config,
        mailer,
        media,
    };

    let app = create_router(app_state);

    tracing::info!("Router configured");

    app
}
