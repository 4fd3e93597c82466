//! API Error Module
//!
//! This module defines the error taxonomy shared by every handler and service.
//! Errors carry an HTTP status code and a client-facing message, and can be
//! converted to HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse, etc.)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Taxonomy
//!
//! | Variant        | Status | Meaning                                      |
//! |----------------|--------|----------------------------------------------|
//! | `NotFound`     | 404    | Referenced entity missing or not visible     |
//! | `Validation`   | 422    | Payload failed a field rule                  |
//! | `Conflict`     | 409    | Uniqueness violation (duplicate email)       |
//! | `NotAcceptable`| 406    | Business rule rejected the operation         |
//! | `Unauthorized` | 401    | Missing or invalid credentials               |
//! | `TokenExpired` | 410    | Access token expired, client should refresh  |
//! | `Forbidden`    | 403    | Refresh failed, client must sign in again    |
//! | `Store`        | 500    | Document store failure                       |
//! | `Internal`     | 500    | Anything else                                |
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse` from Axum, allowing it to be returned
//! directly from handlers. The error is automatically converted to a JSON body
//! of the form `{"statusCode": 404, "message": "Board not found!"}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
