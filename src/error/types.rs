/**
 * API Error Types
 *
 * This module defines the error type used across handlers and services.
 * Every business failure maps to exactly one variant, and every variant
 * maps to exactly one HTTP status code, so clients can rely on both the
 * status and the message text.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * Raised when the request itself is at fault:
 * - Missing or invisible entities (`NotFound`)
 * - Field rule violations (`Validation`)
 * - Duplicate resources (`Conflict`)
 * - Business rules rejecting the operation (`NotAcceptable`)
 *
 * ## Session errors
 *
 * Raised by the authentication layer:
 * - Missing/invalid tokens (`Unauthorized`)
 * - Expired access tokens (`TokenExpired`, HTTP 410; the client is
 *   expected to call the refresh endpoint and retry)
 * - Failed refresh (`Forbidden`; the client must sign in again)
 *
 * ## Server errors
 *
 * Store failures and everything unclassified map to 500.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error type
///
/// This enum represents all errors that can cross the service boundary.
/// Each variant carries a client-facing message and maps to a fixed HTTP
/// status code.
///
/// # Usage
///
/// ```rust
/// use taskboard::error::ApiError;
///
/// let err = ApiError::not_found("Board not found!");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Referenced entity missing, destroyed, or not visible to the caller
    #[error("{message}")]
    NotFound { message: String },

    /// Payload failed a field-level validation rule
    #[error("{message}")]
    Validation { message: String },

    /// Uniqueness violation (e.g. duplicate email)
    #[error("{message}")]
    Conflict { message: String },

    /// A business rule rejected an otherwise well-formed request
    #[error("{message}")]
    NotAcceptable { message: String },

    /// Missing or invalid credentials
    #[error("{message}")]
    Unauthorized { message: String },

    /// Expired access token; the client should refresh and retry
    #[error("{message}")]
    TokenExpired { message: String },

    /// Refresh token rejected; the client must sign in again
    #[error("{message}")]
    Forbidden { message: String },

    /// Document store failure
    #[error("Store error: {0}")]
    Store(#[from] mongodb::error::Error),

    /// Anything unclassified
    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    /// Create a not-found error (404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a validation error (422)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a conflict error (409)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a not-acceptable error (406)
    pub fn not_acceptable(message: impl Into<String>) -> Self {
        Self::NotAcceptable {
            message: message.into(),
        }
    }

    /// Create an unauthorized error (401)
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a token-expired error (410)
    pub fn token_expired(message: impl Into<String>) -> Self {
        Self::TokenExpired {
            message: message.into(),
        }
    }

    /// Create a forbidden error (403)
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create an internal error (500)
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `Validation` - 422 Unprocessable Entity
    /// - `Conflict` - 409 Conflict
    /// - `NotAcceptable` - 406 Not Acceptable
    /// - `Unauthorized` - 401 Unauthorized
    /// - `TokenExpired` - 410 Gone
    /// - `Forbidden` - 403 Forbidden
    /// - `Store` / `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::NotAcceptable { .. } => StatusCode::NOT_ACCEPTABLE,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::TokenExpired { .. } => StatusCode::GONE,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { message }
            | Self::Validation { message }
            | Self::Conflict { message }
            | Self::NotAcceptable { message }
            | Self::Unauthorized { message }
            | Self::TokenExpired { message }
            | Self::Forbidden { message }
            | Self::Internal { message } => message.clone(),
            Self::Store(err) => err.to_string(),
        }
    }
}
