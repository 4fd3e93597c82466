/**
 * Card Types
 *
 * The card record with its embedded comment thread, and the
 * request/response bodies for the card routes.
 */

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::store::json::{serialize_object_id, serialize_object_id_vec};
use crate::validation::{
    require_length, require_object_id, Validate, FIELD_REQUIRED_MESSAGE,
};

/// Card record as stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "_id", serialize_with = "serialize_object_id")]
    pub id: ObjectId,
    #[serde(serialize_with = "serialize_object_id")]
    pub board_id: ObjectId,
    #[serde(serialize_with = "serialize_object_id")]
    pub column_id: ObjectId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Cover image URL, set by upload
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default, serialize_with = "serialize_object_id_vec")]
    pub member_ids: Vec<ObjectId>,
    /// Comment thread, newest first
    #[serde(default)]
    pub comments: Vec<CardComment>,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default, rename = "_destroy")]
    pub destroy: bool,
}

/// One comment on a card
///
/// Identity fields are stamped from the verified token at write time;
/// avatar and display name are denormalized from the payload so the
/// thread renders without extra lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardComment {
    #[serde(serialize_with = "serialize_object_id")]
    pub user_id: ObjectId,
    pub user_email: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(default)]
    pub user_display_name: String,
    pub content: String,
    pub commented_at: i64,
}

/// Body for `POST /v1/cards`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    pub board_id: String,
    pub column_id: String,
    pub title: String,
}

impl Validate for CreateCardRequest {
    fn validate(&self) -> Result<(), ApiError> {
        require_object_id(&self.board_id, "boardId")?;
        require_object_id(&self.column_id, "columnId")?;
        require_length(&self.title, "title", 3, 50)?;
        Ok(())
    }
}

/// Comment payload inside a card update
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(default)]
    pub user_display_name: Option<String>,
    pub content: String,
}

/// Membership change inside a card update
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    pub user_id: String,
    pub action: MemberAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberAction {
    Add,
    Remove,
}

/// Body for `PUT /v1/cards/:id`
///
/// At most one of the special shapes is acted on per request, checked
/// in this order: comment, membership change, generic field merge. The
/// cover variant arrives as multipart instead of JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub comment_to_add: Option<CommentPayload>,
    pub incoming_member_info: Option<MemberUpdate>,
}

impl Validate for UpdateCardRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if let Some(title) = &self.title {
            require_length(title, "title", 3, 50)?;
        }
        if let Some(comment) = &self.comment_to_add {
            if comment.content.trim().is_empty() {
                return Err(ApiError::validation(format!(
                    "commentToAdd.content: {FIELD_REQUIRED_MESSAGE}"
                )));
            }
        }
        if let Some(member_info) = &self.incoming_member_info {
            require_object_id(&member_info.user_id, "incomingMemberInfo.userId")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_card_serializes_ids_as_hex() {
        let card = Card {
            id: ObjectId::parse_str("65f1a2b3c4d5e6f7a8b9c0d1").unwrap(),
            board_id: ObjectId::parse_str("65f1a2b3c4d5e6f7a8b9c0d2").unwrap(),
            column_id: ObjectId::parse_str("65f1a2b3c4d5e6f7a8b9c0d3").unwrap(),
            title: "Write release notes".to_string(),
            description: None,
            cover: None,
            member_ids: vec![ObjectId::parse_str("65f1a2b3c4d5e6f7a8b9c0d4").unwrap()],
            comments: vec![],
            created_at: 1_700_000_000_000,
            updated_at: None,
            destroy: false,
        };

        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["_id"], json!("65f1a2b3c4d5e6f7a8b9c0d1"));
        assert_eq!(value["boardId"], json!("65f1a2b3c4d5e6f7a8b9c0d2"));
        assert_eq!(value["columnId"], json!("65f1a2b3c4d5e6f7a8b9c0d3"));
        assert_eq!(value["memberIds"], json!(["65f1a2b3c4d5e6f7a8b9c0d4"]));
    }

    #[test]
    fn test_member_action_parses_uppercase() {
        let info: MemberUpdate = serde_json::from_value(json!({
            "userId": "65f1a2b3c4d5e6f7a8b9c0d4",
            "action": "ADD",
        }))
        .unwrap();
        assert_eq!(info.action, MemberAction::Add);

        let info: MemberUpdate = serde_json::from_value(json!({
            "userId": "65f1a2b3c4d5e6f7a8b9c0d4",
            "action": "REMOVE",
        }))
        .unwrap();
        assert_eq!(info.action, MemberAction::Remove);

        let bad: Result<MemberUpdate, _> = serde_json::from_value(json!({
            "userId": "65f1a2b3c4d5e6f7a8b9c0d4",
            "action": "add",
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_update_request_rejects_blank_comment() {
        let request = UpdateCardRequest {
            comment_to_add: Some(CommentPayload {
                user_avatar: None,
                user_display_name: Some("Alice".to_string()),
                content: "   ".to_string(),
            }),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_requires_parent_ids() {
        let request = CreateCardRequest {
            board_id: "not-an-id".to_string(),
            column_id: "65f1a2b3c4d5e6f7a8b9c0d3".to_string(),
            title: "Refactor login".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
