/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container for the
 * application, holding:
 * - The MongoDB store
 * - Loaded configuration
 * - Outbound providers (transactional email, media uploads)
 *
 * # Thread Safety
 *
 * Every field is cheap to clone: `Store` wraps the driver's internal
 * connection pool, `AppConfig` sits behind an `Arc`, and both providers
 * hold a shared `reqwest::Client`.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers take `State<Store>` or
 * `State<Arc<AppConfig>>` directly instead of the whole `AppState`,
 * following Axum's substate pattern.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::providers::email::Mailer;
use crate::providers::media::MediaStore;
use crate::server::config::AppConfig;
use crate::store::Store;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `store` - MongoDB store (wraps the driver's pooled client)
/// * `config` - Configuration loaded at startup
/// * `mailer` - Transactional email provider
/// * `media` - Media upload provider
#[derive(Clone)]
pub struct AppState {
    /// MongoDB store
    pub store: Store,

    /// Configuration loaded from the environment at startup
    pub config: Arc<AppConfig>,

    /// Transactional email provider
    pub mailer: Mailer,

    /// Media upload provider for avatars and card covers
    pub media: MediaStore,
}

/// Allow handlers to extract `State<Store>` directly
impl FromRef<AppState> for Store {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Allow handlers to extract `State<Arc<AppConfig>>` directly
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

/// Allow handlers to extract `State<Mailer>` directly
impl FromRef<AppState> for Mailer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.mailer.clone()
    }
}

/// Allow handlers to extract `State<MediaStore>` directly
impl FromRef<AppState> for MediaStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.media.clone()
    }
}
