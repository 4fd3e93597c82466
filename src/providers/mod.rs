//! Providers Module
//!
//! Outbound integrations the API depends on: transactional email for
//! account verification and media hosting for avatars and card covers.
//! Both are thin `reqwest` clients constructed once at startup and cloned
//! into the application state.
//!
//! # Module Structure
//!
//! ```text
//! providers/
//! ├── mod.rs - Module exports and documentation
//! ├── email.rs - Transactional email via the Brevo HTTP API
//! └── media.rs - Image hosting via the Cloudinary upload API
//! ```

/// Transactional email via the Brevo HTTP API
pub mod email;

/// Image hosting via the Cloudinary upload API
pub mod media;

pub use email::Mailer;
pub use media::{read_upload, MediaStore, UploadedFile};
