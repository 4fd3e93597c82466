/**
 * User Types
 *
 * This module defines the user record as stored in MongoDB, the public
 * projection returned to clients, and the request/response bodies for
 * the account routes.
 */

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::store::json::serialize_object_id;
use crate::validation::{require_email, require_password, Validate, FIELD_REQUIRED_MESSAGE};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Client,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Client => "client",
            UserRole::Admin => "admin",
        }
    }
}

/// User record as stored in MongoDB
///
/// Deliberately not `Serialize`: the record carries the password hash
/// and the verification token, so responses go through [`PublicUser`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub email: String,
    pub password: String,
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    #[serde(default)]
    pub verify_token: Option<String>,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default, rename = "_destroy")]
    pub destroy: bool,
}

/// User fields safe to return to clients
///
/// Also the shape of users brought in by `$lookup` stages that project
/// out `password` and `verifyToken`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    #[serde(rename = "_id", serialize_with = "serialize_object_id")]
    pub id: ObjectId,
    pub email: String,
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            display_name: user.display_name,
            avatar: user.avatar,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Body for `POST /v1/users/register`
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), ApiError> {
        require_email(&self.email)?;
        require_password(&self.password)?;
        Ok(())
    }
}

/// Body for `PUT /v1/users/verify`
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub email: String,
    pub token: String,
}

impl Validate for VerifyRequest {
    fn validate(&self) -> Result<(), ApiError> {
        require_email(&self.email)?;
        if self.token.trim().is_empty() {
            return Err(ApiError::validation(format!(
                "token: {FIELD_REQUIRED_MESSAGE}"
            )));
        }
        Ok(())
    }
}

/// Body for `POST /v1/users/login`
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ApiError> {
        require_email(&self.email)?;
        require_password(&self.password)?;
        Ok(())
    }
}

/// JSON body for `PUT /v1/users/update`
///
/// Exactly one of three shapes is expected: a password change
/// (`currentPassword` + `newPassword`), a display name change, or an
/// avatar upload (which arrives as multipart instead of this body).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub display_name: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

impl Validate for UpdateUserRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if let Some(current_password) = &self.current_password {
            require_password(current_password)?;
        }
        if let Some(new_password) = &self.new_password {
            require_password(new_password)?;
        }
        if let Some(display_name) = &self.display_name {
            if display_name.trim() != display_name {
                return Err(ApiError::validation(
                    "displayName must not have leading or trailing whitespace",
                ));
            }
            if display_name.is_empty() {
                return Err(ApiError::validation(format!(
                    "displayName: {FIELD_REQUIRED_MESSAGE}"
                )));
            }
        }
        Ok(())
    }
}

/// Response for `POST /v1/users/login`
///
/// The public user fields flattened to the top level, plus both tokens
/// so non-browser clients can store them without cookie support.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: PublicUser,
    pub access_token: String,
    pub refresh_token: String,
}

/// Response for `GET /v1/users/refresh_token`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Response for `DELETE /v1/users/logout`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub logged_out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_user() -> User {
        User {
            id: ObjectId::parse_str("65f1a2b3c4d5e6f7a8b9c0d1").unwrap(),
            email: "jane@example.com".to_string(),
            password: "$2b$12$secret-hash".to_string(),
            username: "jane".to_string(),
            display_name: "jane".to_string(),
            avatar: None,
            role: UserRole::Client,
            is_active: true,
            verify_token: Some("leftover-token".to_string()),
            created_at: 1_700_000_000_000,
            updated_at: None,
            destroy: false,
        }
    }

    #[test]
    fn test_public_user_strips_secret_fields() {
        let public: PublicUser = sample_user().into();
        let value = serde_json::to_value(&public).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("verifyToken"));
        assert_eq!(
            value["_id"],
            serde_json::json!("65f1a2b3c4d5e6f7a8b9c0d1")
        );
        assert_eq!(value["displayName"], serde_json::json!("jane"));
        assert_eq!(value["role"], serde_json::json!("client"));
    }

    #[test]
    fn test_login_response_flattens_user_fields() {
        let response = LoginResponse {
            user: sample_user().into(),
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["email"], serde_json::json!("jane@example.com"));
        assert_eq!(value["accessToken"], serde_json::json!("access"));
        assert_eq!(value["refreshToken"], serde_json::json!("refresh"));
    }

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest {
            email: "jane@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let bad_password = RegisterRequest {
            email: "jane@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(bad_password.validate().is_err());
    }

    #[test]
    fn test_update_request_rejects_untrimmed_display_name() {
        let request = UpdateUserRequest {
            display_name: Some("  padded  ".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let request = UpdateUserRequest {
            display_name: Some("Jane D".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }
}
