/**
 * Card Service
 *
 * Business rules for cards: create registers the card in its column's
 * order array; update dispatches across the cover, comment, membership
 * and plain-merge variants.
 */

use bson::oid::ObjectId;
use bson::Document;
use chrono::Utc;

use crate::cards::db;
use crate::cards::types::{Card, CardComment, CommentPayload, CreateCardRequest, UpdateCardRequest};
use crate::columns;
use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::providers::{MediaStore, UploadedFile};
use crate::store::Store;
use crate::validation::require_object_id;

/// Create a card and append it to its column's `cardOrderIds`
pub async fn create(store: &Store, request: CreateCardRequest) -> Result<Card, ApiError> {
    let board_id = require_object_id(&request.board_id, "boardId")?;
    let column_id = require_object_id(&request.column_id, "columnId")?;

    let id = db::insert_one(store, board_id, column_id, &request.title).await?;

    let created = db::find_one_by_id(store, id)
        .await?
        .ok_or_else(|| ApiError::internal("Failed to load created card"))?;

    columns::db::push_card_order_ids(store, &created).await?;

    Ok(created)
}

/// Stamp a comment payload with the caller's verified identity
fn build_comment(current_user: &AuthenticatedUser, payload: CommentPayload) -> CardComment {
    CardComment {
        user_id: current_user.id,
        user_email: current_user.email.clone(),
        user_avatar: payload.user_avatar,
        user_display_name: payload.user_display_name.unwrap_or_default(),
        content: payload.content,
        commented_at: Utc::now().timestamp_millis(),
    }
}

/// Apply one card update variant
///
/// Exactly one variant runs per request: a cover upload when a file is
/// attached, otherwise a comment prepend, a membership change, or a
/// plain field merge, in that order.
pub async fn update(
    store: &Store,
    media: &MediaStore,
    current_user: &AuthenticatedUser,
    card_id: ObjectId,
    request: UpdateCardRequest,
    cover: Option<UploadedFile>,
) -> Result<Card, ApiError> {
    let updated = if let Some(file) = cover {
        let url = media.upload(file, "card-covers").await?;
        db::update_one(
            store,
            card_id,
            bson::doc! {
                "cover": url,
                "updatedAt": Utc::now().timestamp_millis(),
            },
        )
        .await?
    } else if let Some(payload) = request.comment_to_add {
        let comment = build_comment(current_user, payload);
        db::unshift_new_comment(store, card_id, &comment).await?
    } else if let Some(member_info) = request.incoming_member_info {
        let member_id = require_object_id(&member_info.user_id, "incomingMemberInfo.userId")?;
        db::update_members(store, card_id, member_id, member_info.action).await?
    } else {
        let mut update = Document::new();
        if let Some(title) = &request.title {
            update.insert("title", title.clone());
        }
        if let Some(description) = &request.description {
            update.insert("description", description.clone());
        }
        update.insert("updatedAt", Utc::now().timestamp_millis());

        db::update_one(store, card_id, update).await?
    };

    updated.ok_or_else(|| ApiError::not_found("Card not found!"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_comment_stamps_caller_identity() {
        let current_user = AuthenticatedUser {
            id: ObjectId::parse_str("65f1a2b3c4d5e6f7a8b9c0d1").unwrap(),
            email: "alice@example.com".to_string(),
        };
        let payload = CommentPayload {
            user_avatar: Some("https://cdn.example.com/a.png".to_string()),
            user_display_name: Some("Alice".to_string()),
            content: "Looks good to me".to_string(),
        };

        let comment = build_comment(&current_user, payload);

        assert_eq!(comment.user_id, current_user.id);
        assert_eq!(comment.user_email, "alice@example.com");
        assert_eq!(comment.user_display_name, "Alice");
        assert_eq!(comment.content, "Looks good to me");
        assert!(comment.commented_at > 0);
    }

    #[test]
    fn test_build_comment_defaults_missing_display_name() {
        let current_user = AuthenticatedUser {
            id: ObjectId::new(),
            email: "bob@example.com".to_string(),
        };
        let payload = CommentPayload {
            user_avatar: None,
            user_display_name: None,
            content: "First!".to_string(),
        };

        let comment = build_comment(&current_user, payload);

        assert_eq!(comment.user_display_name, "");
        assert_eq!(comment.user_avatar, None);
    }
}
