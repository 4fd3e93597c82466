//! Invitations Module
//!
//! Board invitations: an owner invites another account by email, the
//! invitee sees the invitation in their list and accepts or rejects it.
//! Acceptance adds the invitee to the board's members exactly once.
//!
//! # Module Structure
//!
//! ```text
//! invitations/
//! ├── mod.rs          - Module exports and documentation
//! ├── types.rs        - Invitation record, details shape, request types
//! ├── db.rs           - MongoDB operations for the invitations collection
//! ├── service.rs      - Invitation lifecycle rules
//! └── handlers.rs     - HTTP handlers for /v1/invitations routes
//! ```

/// Invitation record and request/response types
pub mod types;

/// MongoDB operations for the invitations collection
pub mod db;

/// Invitation lifecycle business rules
pub mod service;

/// HTTP handlers for invitation routes
pub mod handlers;

pub use types::{BoardInvitationStatus, Invitation, InvitationKind};
