//! Route Configuration Module
//!
//! All HTTP routes for the API server, versioned under `/v1`.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, CORS, body limit, fallback
//! └── api_routes.rs   - /v1 route table and the status probe
//! ```
//!
//! # Route Organization
//!
//! The `/v1` table splits in two. Public routes: the status probe and
//! the account routes that run before a session exists (register,
//! verify, login, logout, refresh). Everything else sits behind the
//! access-token middleware.

/// Router assembly
pub mod router;

/// API endpoint route table
pub mod api_routes;

pub use router::create_router;
