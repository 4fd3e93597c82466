//! Users Module
//!
//! Account lifecycle: registration with email verification, login and
//! token refresh, logout, and account updates (display name, password,
//! avatar).
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs          - Module exports and documentation
//! ├── types.rs        - User record, public projection, request types
//! ├── db.rs           - MongoDB operations for the users collection
//! ├── service.rs      - Account lifecycle business rules
//! └── handlers.rs     - HTTP handlers for /v1/users routes
//! ```
//!
//! # Request Flow
//!
//! ```text
//! Route -> Handler (validate request) -> Service (business rules) -> Db
//! ```

/// User record and request/response types
pub mod types;

/// MongoDB operations for the users collection
pub mod db;

/// Account lifecycle business rules
pub mod service;

/// HTTP handlers for user routes
pub mod handlers;

pub use types::{PublicUser, User, UserRole};
