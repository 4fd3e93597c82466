/**
 * Invitation Service
 *
 * Board invitation lifecycle: creation resolves all three parties
 * before writing, the listing serves the invitee, and acceptance is
 * gated on an exact board-membership test.
 */

use bson::doc;
use bson::oid::ObjectId;

use crate::boards;
use crate::boards::types::Board;
use crate::error::ApiError;
use crate::invitations::db;
use crate::invitations::types::{
    BoardInvitationStatus, CreateInvitationRequest, Invitation, InvitationDetails,
    UpdateInvitationRequest,
};
use crate::store::Store;
use crate::users;
use crate::validation::require_object_id;

/// Create a pending board invitation
///
/// The inviter is the caller; the invitee is resolved by email. Any of
/// the three parties missing fails the whole request before a write.
pub async fn create(
    store: &Store,
    inviter_id: ObjectId,
    request: CreateInvitationRequest,
) -> Result<InvitationDetails, ApiError> {
    let board_id = require_object_id(&request.board_id, "boardId")?;

    let inviter = users::db::find_one_by_id(store, inviter_id).await?;
    let invitee = users::db::find_one_by_email(store, &request.invitee_email).await?;
    let board = boards::db::find_one_by_id(store, board_id).await?;

    let (Some(inviter), Some(invitee), Some(board)) = (inviter, invitee, board) else {
        return Err(ApiError::not_found("Inviter, Invitee or Board not found!"));
    };

    let id = db::insert_one(store, inviter.id, invitee.id, board.id).await?;

    let invitation = db::find_one_by_id(store, id)
        .await?
        .ok_or_else(|| ApiError::internal("Failed to load created invitation"))?;

    Ok(InvitationDetails {
        invitation,
        board: Some(board),
        inviter: Some(inviter.into()),
        invitee: Some(invitee.into()),
    })
}

/// Invitations addressed to the caller
pub async fn list(
    store: &Store,
    invitee_id: ObjectId,
) -> Result<Vec<InvitationDetails>, ApiError> {
    Ok(db::find_for_invitee(store, invitee_id).await?)
}

/// Exact membership test against a board's owner and member id sets
pub fn is_board_member(board: &Board, user_id: ObjectId) -> bool {
    board.owner_ids.contains(&user_id) || board.member_ids.contains(&user_id)
}

/// Accept or reject a board invitation
///
/// Accepting while already an owner or member is refused; a successful
/// acceptance adds the invitee to the board's members exactly once.
pub async fn update(
    store: &Store,
    invitation_id: ObjectId,
    request: UpdateInvitationRequest,
) -> Result<Invitation, ApiError> {
    let status = BoardInvitationStatus::parse(&request.status).ok_or_else(|| {
        ApiError::validation("status: must be one of PENDING, ACCEPTED, REJECTED")
    })?;

    let invitation = db::find_one_by_id(store, invitation_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Invitation not found!"))?;

    let board = boards::db::find_one_by_id(store, invitation.board_invitation.board_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Board not found!"))?;

    if status == BoardInvitationStatus::Accepted && is_board_member(&board, invitation.invitee_id)
    {
        return Err(ApiError::not_acceptable(
            "You are already a member of this board!",
        ));
    }

    let updated = db::update_one(
        store,
        invitation_id,
        doc! {
            "boardInvitation": {
                "boardId": invitation.board_invitation.board_id,
                "status": status.as_str(),
            }
        },
    )
    .await?
    .ok_or_else(|| ApiError::not_found("Invitation not found!"))?;

    if status == BoardInvitationStatus::Accepted {
        boards::db::push_member_ids(store, board.id, invitation.invitee_id).await?;
    }

    Ok(updated)
}
