//! Middleware Module
//!
//! Request-level middleware applied to protected routes. Currently this is
//! the JWT authentication layer; CORS and body limits live on the router
//! itself.
//!
//! # Module Structure
//!
//! ```text
//! middleware/
//! ├── mod.rs - Module exports and documentation
//! └── auth.rs - Cookie authentication middleware and extractor
//! ```

/// JWT cookie authentication middleware and the `AuthUser` extractor
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
