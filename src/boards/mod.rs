//! Boards Module
//!
//! The board aggregate: creation, membership-scoped listing with
//! pagination, the details aggregation that assembles a board with its
//! columns, cards, owners and members, partial updates, and the card
//! move protocol that rewrites column order arrays.
//!
//! # Module Structure
//!
//! ```text
//! boards/
//! ├── mod.rs          - Module exports and documentation
//! ├── types.rs        - Board record, details shape, request types
//! ├── db.rs           - MongoDB operations and aggregation pipelines
//! ├── service.rs      - Business rules (slug, card distribution, moves)
//! └── handlers.rs     - HTTP handlers for /v1/boards routes
//! ```

/// Board record, details shape, and request/response types
pub mod types;

/// MongoDB operations and aggregation pipelines for boards
pub mod db;

/// Board business rules
pub mod service;

/// HTTP handlers for board routes
pub mod handlers;

pub use types::{Board, BoardDetails, BoardKind};
