//! Authentication Module
//!
//! This module handles the session layer: JWT creation/verification and the
//! cookies that carry the tokens. Credential checks and account state live
//! in the `users` module; route protection lives in `middleware`.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`tokens`** - JWT claims, signing and verification
//! - **`cookies`** - Session cookie construction and parsing
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs     - Module exports and documentation
//! ├── tokens.rs  - JWT token management
//! └── cookies.rs - Session cookie helpers
//! ```
//!
//! # Token Lifecycle
//!
//! 1. **Login**: Credentials verified → access token (1 hour) and refresh
//!    token (14 days) minted with separate secrets, delivered as cookies
//! 2. **Request**: Middleware verifies the access token from its cookie
//! 3. **Expiry**: An expired access token yields HTTP 410; the client calls
//!    the refresh endpoint, which verifies the refresh token and mints a new
//!    access token without touching the store
//! 4. **Logout**: Both cookies are cleared

/// JWT token generation and validation
pub mod tokens;

/// Session cookie helpers
pub mod cookies;

// Re-export commonly used items
pub use tokens::{Claims, create_token, verify_token};
pub use cookies::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, auth_cookie, clear_cookie, get_cookie};
