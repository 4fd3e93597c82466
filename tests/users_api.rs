//! Live-store tests for the account lifecycle
//!
//! Registration checks, verification, login, and self-update against a
//! real MongoDB. Ignored by default; run with `cargo test -- --ignored`.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use taskboard::providers::{MediaStore, Mailer};
use taskboard::users::service;
use taskboard::users::types::{LoginRequest, RegisterRequest, UpdateUserRequest, VerifyRequest};
use taskboard::users::{db, UserRole};

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_register_rejects_duplicate_email() {
    let config = common::test_config();
    let store = common::connect(&config).await;
    let mailer = Mailer::new(&config);

    common::seed_active_user(&store, "taken@example.com", "pass1234").await;

    // The duplicate check runs before any mail is attempted
    let error = service::register(
        &store,
        &mailer,
        &config,
        RegisterRequest {
            email: "taken@example.com".to_string(),
            password: "pass1234".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert_eq!(error.status_code(), StatusCode::CONFLICT);
    assert_eq!(error.message(), "Email already exists!");

    common::drop_data(&store).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_verification_then_login() {
    let store = common::test_store().await;
    let config = common::test_config();

    let password_hash = bcrypt::hash("pass1234", 4).expect("bcrypt hash");
    db::insert_one(&store, "fresh@example.com", &password_hash, "fresh", "tok-1")
        .await
        .expect("insert user");

    // Login before verification is refused
    let error = service::login(
        &store,
        &config,
        LoginRequest {
            email: "fresh@example.com".to_string(),
            password: "pass1234".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(error.status_code(), StatusCode::NOT_ACCEPTABLE);
    assert_eq!(error.message(), "Your account is not active!");

    // Wrong token is refused
    let error = service::verify_account(
        &store,
        VerifyRequest {
            email: "fresh@example.com".to_string(),
            token: "wrong-token".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(error.message(), "Token is invalid!");

    // The emailed token activates the account
    let user = service::verify_account(
        &store,
        VerifyRequest {
            email: "fresh@example.com".to_string(),
            token: "tok-1".to_string(),
        },
    )
    .await
    .expect("verify account");
    assert!(user.is_active);
    assert_eq!(user.username, "fresh");
    assert_eq!(user.role, UserRole::Client);

    // A second verification is refused
    let error = service::verify_account(
        &store,
        VerifyRequest {
            email: "fresh@example.com".to_string(),
            token: "tok-1".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(error.message(), "Your account is already active!");

    // Login now succeeds and both tokens round-trip
    let response = service::login(
        &store,
        &config,
        LoginRequest {
            email: "fresh@example.com".to_string(),
            password: "pass1234".to_string(),
        },
    )
    .await
    .expect("login");
    assert_eq!(response.user.email, "fresh@example.com");
    assert!(!response.access_token.is_empty());
    assert!(!response.refresh_token.is_empty());

    let new_access = service::refresh(&config, &response.refresh_token).expect("refresh");
    assert!(!new_access.is_empty());

    common::drop_data(&store).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_login_rejects_wrong_password_and_unknown_email() {
    let store = common::test_store().await;
    let config = common::test_config();

    common::seed_active_user(&store, "known@example.com", "pass1234").await;

    let error = service::login(
        &store,
        &config,
        LoginRequest {
            email: "known@example.com".to_string(),
            password: "wrong5678".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(error.status_code(), StatusCode::NOT_ACCEPTABLE);
    assert_eq!(error.message(), "Your email or password is incorrect!");

    let error = service::login(
        &store,
        &config,
        LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "pass1234".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(error.message(), "Account not found!");

    common::drop_data(&store).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_update_display_name_and_password() {
    let store = common::test_store().await;
    let config = common::test_config();
    let media = MediaStore::new(&config);

    let user = common::seed_active_user(&store, "editor@example.com", "pass1234").await;

    let updated = service::update(
        &store,
        &media,
        user.id,
        UpdateUserRequest {
            display_name: Some("Editor in Chief".to_string()),
            ..Default::default()
        },
        None,
    )
    .await
    .expect("display name update");
    assert_eq!(updated.display_name, "Editor in Chief");

    // Password rotation checks the current password first
    let error = service::update(
        &store,
        &media,
        user.id,
        UpdateUserRequest {
            current_password: Some("wrong5678".to_string()),
            new_password: Some("fresh5678".to_string()),
            ..Default::default()
        },
        None,
    )
    .await
    .unwrap_err();
    assert_eq!(error.message(), "Your current password is incorrect!");

    service::update(
        &store,
        &media,
        user.id,
        UpdateUserRequest {
            current_password: Some("pass1234".to_string()),
            new_password: Some("fresh5678".to_string()),
            ..Default::default()
        },
        None,
    )
    .await
    .expect("password update");

    let response = service::login(
        &store,
        &config,
        LoginRequest {
            email: "editor@example.com".to_string(),
            password: "fresh5678".to_string(),
        },
    )
    .await
    .expect("login with rotated password");
    assert_eq!(response.user.id, user.id);

    // An empty update body is refused
    let error = service::update(
        &store,
        &media,
        user.id,
        UpdateUserRequest::default(),
        None,
    )
    .await
    .unwrap_err();
    assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    common::drop_data(&store).await;
}
