//! Shared fixtures for the live-store test suite
//!
//! Every fixture connects to the MongoDB instance at `TEST_MONGODB_URI`
//! (default `mongodb://localhost:27017`) under a database name unique to
//! that connection, so tests never see each other's data and can run in
//! parallel. The suite is ignored by default; run it with
//! `cargo test -- --ignored` against a disposable MongoDB.

#![allow(dead_code)]

use bson::doc;
use taskboard::server::config::AppConfig;
use taskboard::users::{db as users_db, User};
use taskboard::Store;
use uuid::Uuid;

/// Configuration pointing at the test MongoDB with a unique database
pub fn test_config() -> AppConfig {
    AppConfig {
        app_host: "localhost".to_string(),
        app_port: 0,
        mongodb_uri: std::env::var("TEST_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
        database_name: format!("taskboard_test_{}", Uuid::new_v4().simple()),
        access_token_secret: "test-access-secret".to_string(),
        refresh_token_secret: "test-refresh-secret".to_string(),
        brevo_api_key: String::new(),
        admin_email_address: "noreply@taskboard.dev".to_string(),
        admin_email_name: "Taskboard".to_string(),
        website_domain: "http://localhost:5173".to_string(),
        cloudinary_cloud_name: String::new(),
        cloudinary_upload_preset: String::new(),
        cors_whitelist: vec![],
    }
}

/// Connect to a fresh test database
pub async fn test_store() -> Store {
    connect(&test_config()).await
}

/// Connect with a specific test configuration
pub async fn connect(config: &AppConfig) -> Store {
    Store::connect(config)
        .await
        .expect("test MongoDB not reachable (set TEST_MONGODB_URI)")
}

/// Drop every collection the suite writes to
pub async fn drop_data(store: &Store) {
    for name in ["users", "boards", "columns", "cards", "invitations"] {
        let _ = store.collection::<bson::Document>(name).drop().await;
    }
}

/// Insert an already-activated user, bypassing the verification email
///
/// Hashes at bcrypt cost 4 (the minimum) so the suite does not burn
/// time on hashing.
pub async fn seed_active_user(store: &Store, email: &str, password: &str) -> User {
    let password_hash = bcrypt::hash(password, 4).expect("bcrypt hash");
    let name = email.split_once('@').map(|(name, _)| name).unwrap_or(email);

    let id = users_db::insert_one(store, email, &password_hash, name, "seed-token")
        .await
        .expect("insert user");

    users_db::update_one(
        store,
        id,
        doc! { "isActive": true, "verifyToken": bson::Bson::Null },
    )
    .await
    .expect("activate user")
    .expect("user just inserted")
}
