//! Validation Module
//!
//! Field-level rules applied at the API edge, before any service logic runs.
//! Handlers call [`Validate::validate`] on their request payloads; the
//! `require_*` helpers both enforce a rule and produce the typed value
//! services trust (e.g. a parsed `ObjectId`), so rule failures always
//! surface as 422 responses with a stable message.
//!
//! # Rules
//!
//! - **Object ids**: 24 hexadecimal characters
//! - **Emails**: `local@domain.tld` shape, no whitespace
//! - **Passwords**: 8-256 chars with at least one letter and one digit
//! - **Titles**: 3-50 chars, no leading/trailing whitespace
//! - **Uploads**: jpg/jpeg/png only, at most 10 MB

use bson::oid::ObjectId;

use crate::error::ApiError;

/// Message for strings failing the object id pattern
pub const OBJECT_ID_RULE_MESSAGE: &str = "Your string fails to match the Object Id pattern!";
/// Message for missing required fields
pub const FIELD_REQUIRED_MESSAGE: &str = "This field is required.";
/// Message for malformed email addresses
pub const EMAIL_RULE_MESSAGE: &str = "Email is invalid. (example@taskboard.dev)";
/// Message for weak passwords
pub const PASSWORD_RULE_MESSAGE: &str =
    "Password must include at least 1 letter, a number, and at least 8 characters.";

/// Mime types accepted for image uploads
pub const ALLOWED_UPLOAD_TYPES: &[&str] = &["image/jpg", "image/jpeg", "image/png"];
/// Upload size cap in bytes (10 MB)
pub const MAX_UPLOAD_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Trait implemented by request payloads that carry field rules
pub trait Validate {
    /// Check every field rule, returning the first violation as a 422 error
    fn validate(&self) -> Result<(), ApiError>;
}

/// Check that a string is a 24-char hex object id
pub fn is_object_id(value: &str) -> bool {
    value.len() == 24 && value.chars().all(|c| c.is_ascii_hexdigit())
}

/// Check a `local@domain.tld` email shape
///
/// Mirrors the classic `\S+@\S+\.\S+` rule: no whitespace anywhere, a
/// non-empty local part, and a domain containing a dot with characters on
/// both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

/// Check password strength: 8-256 chars, at least one letter and one digit
pub fn is_valid_password(value: &str) -> bool {
    let len = value.chars().count();
    if !(8..=256).contains(&len) {
        return false;
    }
    value.chars().any(|c| c.is_ascii_alphabetic()) && value.chars().any(|c| c.is_ascii_digit())
}

/// Validate and parse an object id field
///
/// # Arguments
///
/// * `value` - The raw id string from the request
/// * `field` - Field name used in the error message
pub fn require_object_id(value: &str, field: &str) -> Result<ObjectId, ApiError> {
    if !is_object_id(value) {
        return Err(ApiError::validation(format!(
            "{field}: {OBJECT_ID_RULE_MESSAGE}"
        )));
    }
    ObjectId::parse_str(value)
        .map_err(|_| ApiError::validation(format!("{field}: {OBJECT_ID_RULE_MESSAGE}")))
}

/// Validate and parse every element of an object id array field
pub fn require_object_id_vec(values: &[String], field: &str) -> Result<Vec<ObjectId>, ApiError> {
    values
        .iter()
        .map(|value| require_object_id(value, field))
        .collect()
}

/// Validate an email field
pub fn require_email(value: &str) -> Result<(), ApiError> {
    if !is_valid_email(value) {
        return Err(ApiError::validation(EMAIL_RULE_MESSAGE));
    }
    Ok(())
}

/// Validate a password field
pub fn require_password(value: &str) -> Result<(), ApiError> {
    if !is_valid_password(value) {
        return Err(ApiError::validation(PASSWORD_RULE_MESSAGE));
    }
    Ok(())
}

/// Validate a bounded text field, rejecting untrimmed input
///
/// # Arguments
///
/// * `value` - The raw string from the request
/// * `field` - Field name used in the error message
/// * `min` / `max` - Inclusive length bounds in characters
pub fn require_length(value: &str, field: &str, min: usize, max: usize) -> Result<(), ApiError> {
    if value.trim() != value {
        return Err(ApiError::validation(format!(
            "{field} must not have leading or trailing whitespace"
        )));
    }
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ApiError::validation(format!(
            "{field} length must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

/// Validate an uploaded file's mime type and size
///
/// # Arguments
///
/// * `content_type` - The part's declared mime type
/// * `size` - The part's size in bytes
pub fn require_upload(content_type: &str, size: usize) -> Result<(), ApiError> {
    if !ALLOWED_UPLOAD_TYPES.contains(&content_type) {
        return Err(ApiError::validation(
            "File type is invalid. Only accept jpg, jpeg and png",
        ));
    }
    if size > MAX_UPLOAD_SIZE_BYTES {
        return Err(ApiError::validation("Maximum file size exceeded. (10MB)"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_object_id_rule() {
        assert!(is_object_id("65f1a2b3c4d5e6f7a8b9c0d1"));
        assert!(is_object_id("ABCDEF0123456789abcdef01"));
        assert!(!is_object_id("65f1a2b3c4d5e6f7a8b9c0")); // too short
        assert!(!is_object_id("65f1a2b3c4d5e6f7a8b9c0d1ff")); // too long
        assert!(!is_object_id("65f1a2b3c4d5e6f7a8b9c0dz")); // non-hex
        assert!(!is_object_id(""));
    }

    #[test]
    fn test_email_rule() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@examplecom"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_password_rule() {
        assert!(is_valid_password("abcdef12"));
        assert!(is_valid_password("Str0ngEnough!"));
        assert!(!is_valid_password("short1")); // under 8 chars
        assert!(!is_valid_password("allletters")); // no digit
        assert!(!is_valid_password("12345678")); // no letter
    }

    #[test]
    fn test_require_object_id_parses() {
        let id = require_object_id("65f1a2b3c4d5e6f7a8b9c0d1", "boardId").unwrap();
        assert_eq!(id.to_hex(), "65f1a2b3c4d5e6f7a8b9c0d1");

        let err = require_object_id("nope", "boardId").unwrap_err();
        assert_eq!(err.status_code().as_u16(), 422);
        assert!(err.message().contains("boardId"));
    }

    #[test]
    fn test_require_object_id_vec_fails_on_any_bad_element() {
        let good = vec![
            "65f1a2b3c4d5e6f7a8b9c0d1".to_string(),
            "65f1a2b3c4d5e6f7a8b9c0d2".to_string(),
        ];
        assert_eq!(require_object_id_vec(&good, "cardOrderIds").unwrap().len(), 2);

        let bad = vec!["65f1a2b3c4d5e6f7a8b9c0d1".to_string(), "oops".to_string()];
        assert!(require_object_id_vec(&bad, "cardOrderIds").is_err());
    }

    #[test]
    fn test_require_length_rejects_untrimmed() {
        assert!(require_length("Backlog", "title", 3, 50).is_ok());
        assert!(require_length(" Backlog", "title", 3, 50).is_err());
        assert!(require_length("Backlog ", "title", 3, 50).is_err());
        assert!(require_length("ab", "title", 3, 50).is_err());
        assert!(require_length(&"x".repeat(51), "title", 3, 50).is_err());
    }

    #[test]
    fn test_require_upload() {
        assert!(require_upload("image/png", 1024).is_ok());
        assert!(require_upload("image/jpeg", MAX_UPLOAD_SIZE_BYTES).is_ok());

        let err = require_upload("image/gif", 1024).unwrap_err();
        assert!(err.message().contains("jpg, jpeg and png"));

        let err = require_upload("image/png", MAX_UPLOAD_SIZE_BYTES + 1).unwrap_err();
        assert!(err.message().contains("10MB"));
    }
}
