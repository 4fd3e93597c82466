//! Live-store tests for the board invitation lifecycle
//!
//! Creation with party resolution, the invitee listing with its joins,
//! and the accept/reject transitions including the membership guard.
//! Ignored by default; run with `cargo test -- --ignored`.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use taskboard::boards::types::{BoardKind, CreateBoardRequest};
use taskboard::invitations::types::{
    BoardInvitationStatus, CreateInvitationRequest, UpdateInvitationRequest,
};
use taskboard::{boards, invitations};

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_invite_then_accept_adds_member() {
    let store = common::test_store().await;
    let inviter = common::seed_active_user(&store, "owner@example.com", "pass1234").await;
    let invitee = common::seed_active_user(&store, "guest@example.com", "pass1234").await;

    let board = boards::service::create(
        &store,
        inviter.id,
        CreateBoardRequest {
            title: "Shared Board".to_string(),
            description: None,
            kind: BoardKind::Private,
        },
    )
    .await
    .expect("create board");

    let details = invitations::service::create(
        &store,
        inviter.id,
        CreateInvitationRequest {
            invitee_email: "guest@example.com".to_string(),
            board_id: board.id.to_hex(),
        },
    )
    .await
    .expect("create invitation");

    assert_eq!(
        details.invitation.board_invitation.status,
        BoardInvitationStatus::Pending
    );
    assert_eq!(details.board.as_ref().map(|b| b.id), Some(board.id));
    assert_eq!(
        details.inviter.as_ref().map(|u| u.email.as_str()),
        Some("owner@example.com")
    );
    assert_eq!(
        details.invitee.as_ref().map(|u| u.email.as_str()),
        Some("guest@example.com")
    );

    // The invitee sees it in their listing, joins included
    let listed = invitations::service::list(&store, invitee.id)
        .await
        .expect("invitee listing");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].invitation.id, details.invitation.id);
    assert_eq!(
        listed[0].inviter.as_ref().map(|u| u.email.as_str()),
        Some("owner@example.com")
    );
    assert_eq!(listed[0].board.as_ref().map(|b| b.id), Some(board.id));

    // The inviter's listing is empty
    let other_side = invitations::service::list(&store, inviter.id)
        .await
        .expect("inviter listing");
    assert!(other_side.is_empty());

    let updated = invitations::service::update(
        &store,
        details.invitation.id,
        UpdateInvitationRequest {
            status: "ACCEPTED".to_string(),
        },
    )
    .await
    .expect("accept invitation");
    assert_eq!(
        updated.board_invitation.status,
        BoardInvitationStatus::Accepted
    );

    let stored_board = boards::db::find_one_by_id(&store, board.id)
        .await
        .expect("read board")
        .expect("board exists");
    assert_eq!(stored_board.member_ids, vec![invitee.id]);

    common::drop_data(&store).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_accepting_twice_is_refused() {
    let store = common::test_store().await;
    let inviter = common::seed_active_user(&store, "owner@example.com", "pass1234").await;
    let invitee = common::seed_active_user(&store, "guest@example.com", "pass1234").await;

    let board = boards::service::create(
        &store,
        inviter.id,
        CreateBoardRequest {
            title: "Shared Board".to_string(),
            description: None,
            kind: BoardKind::Private,
        },
    )
    .await
    .expect("create board");

    let first = invitations::service::create(
        &store,
        inviter.id,
        CreateInvitationRequest {
            invitee_email: "guest@example.com".to_string(),
            board_id: board.id.to_hex(),
        },
    )
    .await
    .expect("first invitation");

    invitations::service::update(
        &store,
        first.invitation.id,
        UpdateInvitationRequest {
            status: "ACCEPTED".to_string(),
        },
    )
    .await
    .expect("first accept");

    // A second invitation for the same pair cannot be accepted
    let second = invitations::service::create(
        &store,
        inviter.id,
        CreateInvitationRequest {
            invitee_email: "guest@example.com".to_string(),
            board_id: board.id.to_hex(),
        },
    )
    .await
    .expect("second invitation");

    let error = invitations::service::update(
        &store,
        second.invitation.id,
        UpdateInvitationRequest {
            status: "ACCEPTED".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(error.status_code(), StatusCode::NOT_ACCEPTABLE);
    assert_eq!(error.message(), "You are already a member of this board!");

    let stored_board = boards::db::find_one_by_id(&store, board.id)
        .await
        .expect("read board")
        .expect("board exists");
    assert_eq!(stored_board.member_ids, vec![invitee.id]);

    common::drop_data(&store).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_rejection_leaves_members_untouched() {
    let store = common::test_store().await;
    let inviter = common::seed_active_user(&store, "owner@example.com", "pass1234").await;
    common::seed_active_user(&store, "guest@example.com", "pass1234").await;

    let board = boards::service::create(
        &store,
        inviter.id,
        CreateBoardRequest {
            title: "Shared Board".to_string(),
            description: None,
            kind: BoardKind::Private,
        },
    )
    .await
    .expect("create board");

    let details = invitations::service::create(
        &store,
        inviter.id,
        CreateInvitationRequest {
            invitee_email: "guest@example.com".to_string(),
            board_id: board.id.to_hex(),
        },
    )
    .await
    .expect("create invitation");

    let updated = invitations::service::update(
        &store,
        details.invitation.id,
        UpdateInvitationRequest {
            status: "REJECTED".to_string(),
        },
    )
    .await
    .expect("reject invitation");
    assert_eq!(
        updated.board_invitation.status,
        BoardInvitationStatus::Rejected
    );

    let stored_board = boards::db::find_one_by_id(&store, board.id)
        .await
        .expect("read board")
        .expect("board exists");
    assert!(stored_board.member_ids.is_empty());

    common::drop_data(&store).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_missing_party_fails_creation() {
    let store = common::test_store().await;
    let inviter = common::seed_active_user(&store, "owner@example.com", "pass1234").await;

    let board = boards::service::create(
        &store,
        inviter.id,
        CreateBoardRequest {
            title: "Shared Board".to_string(),
            description: None,
            kind: BoardKind::Private,
        },
    )
    .await
    .expect("create board");

    // Invitee email that matches no account
    let error = invitations::service::create(
        &store,
        inviter.id,
        CreateInvitationRequest {
            invitee_email: "ghost@example.com".to_string(),
            board_id: board.id.to_hex(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(error.message(), "Inviter, Invitee or Board not found!");

    common::drop_data(&store).await;
}
