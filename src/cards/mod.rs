//! Cards Module
//!
//! Cards are the unit of work on a board. Beyond title and description
//! they carry a cover image, a member list, and an embedded comment
//! thread kept newest-first. Updates dispatch on payload shape: cover
//! upload, comment, membership change, or a plain field merge.
//!
//! # Module Structure
//!
//! ```text
//! cards/
//! ├── mod.rs          - Module exports and documentation
//! ├── types.rs        - Card record, comments, request types
//! ├── db.rs           - MongoDB operations for the cards collection
//! ├── service.rs      - Card business rules and update dispatch
//! └── handlers.rs     - HTTP handlers for /v1/cards routes
//! ```

/// Card record and request/response types
pub mod types;

/// MongoDB operations for the cards collection
pub mod db;

/// Card business rules
pub mod service;

/// HTTP handlers for card routes
pub mod handlers;

pub use types::{Card, CardComment};
