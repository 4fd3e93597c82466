//! Document Store Module
//!
//! This module owns the MongoDB client lifecycle and hands out typed
//! collection handles. The client is created explicitly at startup, injected
//! into the application state, and closed on shutdown; there is no global
//! connection singleton.
//!
//! # Architecture
//!
//! ```text
//! store/
//! ├── mod.rs  - Store client (connect / collection access / close)
//! └── json.rs - JSON rendering helpers for BSON types
//! ```
//!
//! # Lifecycle
//!
//! 1. `Store::connect` parses the connection string, builds the client and
//!    pings the target database, so a misconfigured store fails at boot
//!    instead of on the first request.
//! 2. Handlers reach the store through `AppState`; `Store` is cheap to clone
//!    (the underlying client is reference-counted).
//! 3. `Store::close` shuts the client down after the HTTP server drains.

/// JSON rendering helpers for BSON types
pub mod json;

use bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use crate::server::config::AppConfig;

/// Handle to the document store
///
/// Wraps the MongoDB client and the application database. All collection
/// access goes through [`Store::collection`] so collection names stay in the
/// entity modules that own them.
#[derive(Clone)]
pub struct Store {
    client: Client,
    db: Database,
}

impl Store {
    /// Connect to the document store and verify the connection
    ///
    /// Parses `config.mongodb_uri`, builds the client, and pings the
    /// configured database. Connection or ping failures abort startup.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration carrying the URI and database name
    pub async fn connect(config: &AppConfig) -> Result<Self, mongodb::error::Error> {
        let options = ClientOptions::parse(&config.mongodb_uri).await?;
        let client = Client::with_options(options)?;
        let db = client.database(&config.database_name);

        // Fail fast: surface unreachable or misconfigured stores at boot.
        db.run_command(doc! { "ping": 1 }).await?;

        Ok(Self { client, db })
    }

    /// Get a typed handle to a named collection
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Shut down the client, releasing its connection pool
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}
