//! Server Module
//!
//! This module contains all code for initializing and configuring the
//! Axum HTTP server. It provides the foundation for the application's
//! infrastructure.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`config`** - Environment-based configuration loading
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - AppConfig loaded from environment variables
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - App assembly (providers, state, router)
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env` reads the environment
//! 2. **Store Connection**: `Store::connect` opens MongoDB and pings it
//! 3. **State Creation**: `AppState` bundles the store, config and providers
//! 4. **Router Creation**: `create_app` wires routes, CORS and middleware

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
