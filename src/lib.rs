//! Taskboard - Main Library
//!
//! Taskboard is a REST backend for a kanban-style task management application:
//! users register and verify their accounts, create boards, organize columns
//! and cards inside boards, invite collaborators, and reorder cards via
//! drag-and-drop. It is built on Axum with a MongoDB document store.
//!
//! # Overview
//!
//! This library provides the core functionality for Taskboard, including:
//! - Cookie-based JWT authentication with access/refresh token rotation
//! - Board aggregation queries that assemble the full nested board view
//! - A card-move protocol keeping column order arrays consistent
//! - Board invitations with a pending/accepted/rejected lifecycle
//! - Transactional email and image upload providers
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - Configuration, application state, app assembly
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`store`** - MongoDB client lifecycle and collection access
//! - **`error`** - API error taxonomy and HTTP response conversion
//! - **`auth`** - JWT tokens and session cookies
//! - **`middleware`** - Request authentication middleware
//! - **`validation`** - Field-level validation rules applied at the API edge
//! - **`users`**, **`boards`**, **`columns`**, **`cards`**, **`invitations`** -
//!   One module per entity, each split into `types`, `db`, `service`, `handlers`
//! - **`providers`** - Outbound email delivery and media storage
//!
//! ```text
//! src/
//! ├── lib.rs          - Module exports and documentation
//! ├── main.rs         - Server entry point
//! ├── server/         - Config, state, app assembly
//! ├── routes/         - Route configuration
//! ├── store/          - Document store access
//! ├── error/          - Error types
//! ├── auth/           - Tokens and cookies
//! ├── middleware/     - Auth middleware
//! ├── validation/     - Field validation rules
//! ├── users/          - Accounts, login, verification
//! ├── boards/         - Boards, aggregation, card moves
//! ├── columns/        - Columns and cascade delete
//! ├── cards/          - Cards, comments, members, covers
//! ├── invitations/    - Board invitations
//! └── providers/      - Email and media upload
//! ```
//!
//! # Request Flow
//!
//! Every request follows the same layering:
//!
//! 1. **Routes** match the path and apply the auth middleware where required
//! 2. **Handlers** parse the request and validate the payload
//! 3. **Services** apply business rules and orchestrate multi-collection writes
//! 4. **Db functions** talk to the document store through a shared [`store::Store`]
//!
//! # Error Handling
//!
//! The library uses Rust's standard error handling:
//!
//! - `Result<T, E>` for fallible operations
//! - [`error::ApiError`] carries the HTTP status and client-facing message
//! - Errors convert to `{"statusCode", "message"}` JSON responses

/// Server configuration, state and app assembly
pub mod server;

/// Route configuration
pub mod routes;

/// Document store access
pub mod store;

/// API error types
pub mod error;

/// JWT tokens and session cookies
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Field-level validation rules
pub mod validation;

/// User accounts, login and verification
pub mod users;

/// Boards, aggregation queries and the card-move protocol
pub mod boards;

/// Columns and their cascade delete
pub mod columns;

/// Cards, comments, members and covers
pub mod cards;

/// Board invitations
pub mod invitations;

/// Outbound email and media providers
pub mod providers;

// Re-export commonly used types
pub use error::ApiError;
pub use server::state::AppState;
pub use store::Store;
