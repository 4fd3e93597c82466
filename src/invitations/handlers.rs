/**
 * Invitation Handlers
 *
 * HTTP handlers for the `/v1/invitations` routes. All of them sit
 * behind the authentication middleware; the inviter and the invitee
 * views both key off the verified caller identity.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::error::ApiError;
use crate::invitations::service;
use crate::invitations::types::{
    CreateInvitationRequest, Invitation, InvitationDetails, UpdateInvitationRequest,
};
use crate::middleware::AuthUser;
use crate::server::state::AppState;
use crate::validation::{require_object_id, Validate};

/// Handle `GET /v1/invitations`
///
/// Every invitation addressed to the caller, each joined with its
/// board and both users.
pub async fn get_invitations(
    State(app_state): State<AppState>,
    AuthUser(current_user): AuthUser,
) -> Result<Json<Vec<InvitationDetails>>, ApiError> {
    let invitations = service::list(&app_state.store, current_user.id).await?;

    Ok(Json(invitations))
}

/// Handle `POST /v1/invitations/board`
///
/// # Returns
///
/// `201 Created` with the stored invitation plus the board and both
/// sanitized users, so the client needs no follow-up fetches.
pub async fn create_invitation(
    State(app_state): State<AppState>,
    AuthUser(current_user): AuthUser,
    Json(request): Json<CreateInvitationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!(
        "Invitation from user {} to {} for board {}",
        current_user.id,
        request.invitee_email,
        request.board_id
    );
    request.validate()?;

    let details = service::create(&app_state.store, current_user.id, request).await?;

    Ok((StatusCode::CREATED, Json(details)))
}

/// Handle `PUT /v1/invitations/board/{invitationId}`
pub async fn update_invitation(
    State(app_state): State<AppState>,
    Path(invitation_id): Path<String>,
    Json(request): Json<UpdateInvitationRequest>,
) -> Result<Json<Invitation>, ApiError> {
    let invitation_id = require_object_id(&invitation_id, "invitationId")?;
    request.validate()?;

    let invitation = service::update(&app_state.store, invitation_id, request).await?;

    Ok(Json(invitation))
}
