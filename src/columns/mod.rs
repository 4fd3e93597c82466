//! Columns Module
//!
//! Columns group cards inside a board and carry the `cardOrderIds`
//! array that fixes card order. Creation registers the column in its
//! board's order array; deletion cascades to the column's cards and
//! unregisters it.
//!
//! # Module Structure
//!
//! ```text
//! columns/
//! ├── mod.rs          - Module exports and documentation
//! ├── types.rs        - Column record and request types
//! ├── db.rs           - MongoDB operations for the columns collection
//! ├── service.rs      - Create/update/cascade-delete rules
//! └── handlers.rs     - HTTP handlers for /v1/columns routes
//! ```

/// Column record and request/response types
pub mod types;

/// MongoDB operations for the columns collection
pub mod db;

/// Column business rules
pub mod service;

/// HTTP handlers for column routes
pub mod handlers;

pub use types::{Column, ColumnWithCards};
