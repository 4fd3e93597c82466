/**
 * User Service
 *
 * Business rules for the account lifecycle: registration with email
 * verification, account activation, login, token refresh, and account
 * updates. Handlers validate the request shape before calling in here;
 * this layer owns the checks that need database state.
 */

use bcrypt::{hash, verify, DEFAULT_COST};
use bson::doc;
use bson::oid::ObjectId;
use bson::Bson;
use uuid::Uuid;

use crate::auth::tokens::{
    create_token, verify_token, ACCESS_TOKEN_LIFE_SECS, REFRESH_TOKEN_LIFE_SECS,
};
use crate::error::ApiError;
use crate::providers::email::Mailer;
use crate::providers::media::{MediaStore, UploadedFile};
use crate::server::config::AppConfig;
use crate::store::Store;
use crate::users::db;
use crate::users::types::{
    LoginRequest, LoginResponse, PublicUser, RegisterRequest, UpdateUserRequest, VerifyRequest,
};

/// Register a new account and send the verification email
///
/// The account starts inactive; the emailed link carries a one-time
/// token that `verify` checks before activation.
pub async fn register(
    store: &Store,
    mailer: &Mailer,
    config: &AppConfig,
    request: RegisterRequest,
) -> Result<PublicUser, ApiError> {
    if db::find_one_by_email(store, &request.email).await?.is_some() {
        return Err(ApiError::conflict("Email already exists!"));
    }

    // The part before the @ seeds both username and display name
    let name = request
        .email
        .split_once('@')
        .map(|(name, _)| name)
        .unwrap_or(&request.email);

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::internal("Server error")
    })?;

    let verify_token = Uuid::new_v4().to_string();

    let id = db::insert_one(store, &request.email, &password_hash, name, &verify_token).await?;

    let created = db::find_one_by_id(store, id)
        .await?
        .ok_or_else(|| ApiError::internal("Failed to load created account"))?;

    let verification_link = format!(
        "{}/account/verification?email={}&token={}",
        config.website_domain, created.email, verify_token
    );
    let subject = "Taskboard: Please verify your email before using our services!";
    let html_content = format!(
        "<h3>Here is your verification link:</h3>\
         <h3>{verification_link}</h3>\
         <h3>Sincerely,<br/>- The Taskboard Team -</h3>"
    );

    mailer.send(&created.email, subject, &html_content).await?;

    Ok(created.into())
}

/// Activate an account using the emailed verification token
pub async fn verify_account(store: &Store, request: VerifyRequest) -> Result<PublicUser, ApiError> {
    let user = db::find_one_by_email(store, &request.email)
        .await?
        .ok_or_else(|| ApiError::not_found("Account not found!"))?;

    if user.is_active {
        return Err(ApiError::not_acceptable("Your account is already active!"));
    }
    if user.verify_token.as_deref() != Some(request.token.as_str()) {
        return Err(ApiError::not_acceptable("Token is invalid!"));
    }

    let update = doc! {
        "isActive": true,
        "verifyToken": Bson::Null,
    };

    let updated = db::update_one(store, user.id, update)
        .await?
        .ok_or_else(|| ApiError::not_found("Account not found!"))?;

    Ok(updated.into())
}

/// Check credentials and mint both session tokens
pub async fn login(
    store: &Store,
    config: &AppConfig,
    request: LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let user = db::find_one_by_email(store, &request.email)
        .await?
        .ok_or_else(|| ApiError::not_found("Account not found!"))?;

    if !user.is_active {
        return Err(ApiError::not_acceptable("Your account is not active!"));
    }

    let password_matches = verify(&request.password, &user.password).map_err(|e| {
        tracing::error!("Failed to verify password: {:?}", e);
        ApiError::internal("Server error")
    })?;
    if !password_matches {
        return Err(ApiError::not_acceptable(
            "Your email or password is incorrect!",
        ));
    }

    let access_token = create_token(
        user.id,
        &user.email,
        &config.access_token_secret,
        ACCESS_TOKEN_LIFE_SECS,
    )
    .map_err(|e| {
        tracing::error!("Failed to create access token: {:?}", e);
        ApiError::internal("Server error")
    })?;

    let refresh_token = create_token(
        user.id,
        &user.email,
        &config.refresh_token_secret,
        REFRESH_TOKEN_LIFE_SECS,
    )
    .map_err(|e| {
        tracing::error!("Failed to create refresh token: {:?}", e);
        ApiError::internal("Server error")
    })?;

    Ok(LoginResponse {
        user: user.into(),
        access_token,
        refresh_token,
    })
}

/// Mint a fresh access token from a valid refresh token
///
/// Any failure collapses into one 403 so the client's only recovery
/// path is a new sign-in.
pub fn refresh(config: &AppConfig, refresh_token: &str) -> Result<String, ApiError> {
    let claims = verify_token(refresh_token, &config.refresh_token_secret)
        .map_err(|_| ApiError::forbidden("Please Sign In! (Error from refresh Token)"))?;

    let user_id = ObjectId::parse_str(&claims.id)
        .map_err(|_| ApiError::forbidden("Please Sign In! (Error from refresh Token)"))?;

    create_token(
        user_id,
        &claims.email,
        &config.access_token_secret,
        ACCESS_TOKEN_LIFE_SECS,
    )
    .map_err(|_| ApiError::forbidden("Please Sign In! (Error from refresh Token)"))
}

/// Update the caller's own account
///
/// Dispatches on the request shape: password change, avatar upload, or
/// display name change. Returns the sanitized updated user.
pub async fn update(
    store: &Store,
    media: &MediaStore,
    user_id: ObjectId,
    request: UpdateUserRequest,
    avatar: Option<UploadedFile>,
) -> Result<PublicUser, ApiError> {
    let user = db::find_one_by_id(store, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Account not found!"))?;

    if !user.is_active {
        return Err(ApiError::not_acceptable("Your account is not active!"));
    }

    let update = if let (Some(current_password), Some(new_password)) =
        (&request.current_password, &request.new_password)
    {
        let password_matches = verify(current_password, &user.password).map_err(|e| {
            tracing::error!("Failed to verify password: {:?}", e);
            ApiError::internal("Server error")
        })?;
        if !password_matches {
            return Err(ApiError::not_acceptable(
                "Your current password is incorrect!",
            ));
        }

        let password_hash = hash(new_password, DEFAULT_COST).map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            ApiError::internal("Server error")
        })?;
        doc! { "password": password_hash }
    } else if let Some(file) = avatar {
        let url = media.upload(file, "users").await?;
        doc! { "avatar": url }
    } else if let Some(display_name) = &request.display_name {
        doc! { "displayName": display_name }
    } else {
        return Err(ApiError::validation("No update data provided"));
    };

    let updated = db::update_one(store, user.id, update)
        .await?
        .ok_or_else(|| ApiError::not_found("Account not found!"))?;

    Ok(updated.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn test_config() -> AppConfig {
        AppConfig {
            app_host: "localhost".to_string(),
            app_port: 0,
            mongodb_uri: String::new(),
            database_name: String::new(),
            access_token_secret: "access-secret".to_string(),
            refresh_token_secret: "refresh-secret".to_string(),
            brevo_api_key: String::new(),
            admin_email_address: String::new(),
            admin_email_name: String::new(),
            website_domain: "http://localhost:5173".to_string(),
            cloudinary_cloud_name: String::new(),
            cloudinary_upload_preset: String::new(),
            cors_whitelist: vec![],
        }
    }

    #[test]
    fn test_refresh_mints_access_token() {
        let config = test_config();
        let user_id = ObjectId::new();

        let refresh_token = create_token(
            user_id,
            "jane@example.com",
            &config.refresh_token_secret,
            REFRESH_TOKEN_LIFE_SECS,
        )
        .unwrap();

        let access_token = refresh(&config, &refresh_token).unwrap();
        let claims = verify_token(&access_token, &config.access_token_secret).unwrap();
        assert_eq!(claims.id, user_id.to_hex());
        assert_eq!(claims.email, "jane@example.com");
    }

    #[test]
    fn test_refresh_rejects_access_token_as_refresh() {
        let config = test_config();

        // Signed with the access secret, so the refresh secret must reject it
        let token = create_token(
            ObjectId::new(),
            "jane@example.com",
            &config.access_token_secret,
            ACCESS_TOKEN_LIFE_SECS,
        )
        .unwrap();

        let error = refresh(&config, &token).unwrap_err();
        assert_eq!(error.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(error.message(), "Please Sign In! (Error from refresh Token)");
    }

    #[test]
    fn test_refresh_rejects_garbage() {
        let config = test_config();
        let error = refresh(&config, "not-a-jwt").unwrap_err();
        assert_eq!(error.status_code(), StatusCode::FORBIDDEN);
    }
}
