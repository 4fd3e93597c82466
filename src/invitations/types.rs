/**
 * Invitation Types
 *
 * The invitation record with its nested board-invitation payload, the
 * joined details shape responses use, and the request bodies for the
 * invitation routes.
 */

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::boards::types::Board;
use crate::error::ApiError;
use crate::store::json::serialize_object_id;
use crate::users::types::PublicUser;
use crate::validation::{require_email, require_object_id, Validate};

/// Invitation discriminator
///
/// Board invitations are the only kind today; the stored `type` field
/// keeps the collection open to other kinds later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvitationKind {
    #[serde(rename = "BOARD_INVITATION")]
    BoardInvitation,
}

impl InvitationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvitationKind::BoardInvitation => "BOARD_INVITATION",
        }
    }
}

/// Lifecycle state of a board invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoardInvitationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl BoardInvitationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardInvitationStatus::Pending => "PENDING",
            BoardInvitationStatus::Accepted => "ACCEPTED",
            BoardInvitationStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(BoardInvitationStatus::Pending),
            "ACCEPTED" => Some(BoardInvitationStatus::Accepted),
            "REJECTED" => Some(BoardInvitationStatus::Rejected),
            _ => None,
        }
    }
}

/// Nested payload of a board invitation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardInvitation {
    #[serde(serialize_with = "serialize_object_id")]
    pub board_id: ObjectId,
    pub status: BoardInvitationStatus,
}

/// Invitation record as stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    #[serde(rename = "_id", serialize_with = "serialize_object_id")]
    pub id: ObjectId,
    #[serde(serialize_with = "serialize_object_id")]
    pub inviter_id: ObjectId,
    #[serde(serialize_with = "serialize_object_id")]
    pub invitee_id: ObjectId,
    #[serde(rename = "type")]
    pub kind: InvitationKind,
    pub board_invitation: BoardInvitation,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default, rename = "_destroy")]
    pub destroy: bool,
}

/// Invitation joined with its board and both users
///
/// Response shape for creation and the invitee's listing. A referent
/// that has vanished since the invitation was written serializes as
/// `null` rather than dropping the whole invitation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDetails {
    #[serde(flatten)]
    pub invitation: Invitation,
    pub board: Option<Board>,
    pub inviter: Option<PublicUser>,
    pub invitee: Option<PublicUser>,
}

/// Body for `POST /v1/invitations/board`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationRequest {
    pub invitee_email: String,
    pub board_id: String,
}

impl Validate for CreateInvitationRequest {
    fn validate(&self) -> Result<(), ApiError> {
        require_email(&self.invitee_email)?;
        require_object_id(&self.board_id, "boardId")?;
        Ok(())
    }
}

/// Body for `PUT /v1/invitations/board/:invitationId`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvitationRequest {
    pub status: String,
}

impl Validate for UpdateInvitationRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if BoardInvitationStatus::parse(&self.status).is_none() {
            return Err(ApiError::validation(
                "status: must be one of PENDING, ACCEPTED, REJECTED",
            ));
        }
        Ok(())
    }
}
