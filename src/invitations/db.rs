/**
 * Invitation Database Operations
 *
 * MongoDB operations for the `invitations` collection, including the
 * invitee-side listing aggregation that joins inviter, invitee and
 * board onto every invitation.
 */

use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;
use serde::Deserialize;

use crate::boards::db::BOARDS_COLLECTION;
use crate::boards::types::Board;
use crate::invitations::types::{
    BoardInvitation, BoardInvitationStatus, Invitation, InvitationDetails, InvitationKind,
};
use crate::store::Store;
use crate::users::db::USERS_COLLECTION;
use crate::users::types::PublicUser;

pub const INVITATIONS_COLLECTION: &str = "invitations";

/// Fields an update may never touch
const INVALID_UPDATE_FIELDS: &[&str] = &["_id", "inviterId", "inviteeId", "type", "createdAt"];

fn collection(store: &Store) -> Collection<Invitation> {
    store.collection(INVITATIONS_COLLECTION)
}

fn return_after() -> FindOneAndUpdateOptions {
    FindOneAndUpdateOptions::builder()
        .return_document(ReturnDocument::After)
        .build()
}

/// Insert a new pending board invitation and return its id
pub async fn insert_one(
    store: &Store,
    inviter_id: ObjectId,
    invitee_id: ObjectId,
    board_id: ObjectId,
) -> Result<ObjectId, mongodb::error::Error> {
    let id = ObjectId::new();

    let document = doc! {
        "_id": id,
        "inviterId": inviter_id,
        "inviteeId": invitee_id,
        "type": InvitationKind::BoardInvitation.as_str(),
        "boardInvitation": {
            "boardId": board_id,
            "status": BoardInvitationStatus::Pending.as_str(),
        },
        "createdAt": Utc::now().timestamp_millis(),
        "updatedAt": Bson::Null,
        "_destroy": false,
    };

    store
        .collection::<Document>(INVITATIONS_COLLECTION)
        .insert_one(document)
        .await?;

    Ok(id)
}

/// Find an invitation by id
pub async fn find_one_by_id(
    store: &Store,
    id: ObjectId,
) -> Result<Option<Invitation>, mongodb::error::Error> {
    collection(store).find_one(doc! { "_id": id }).await
}

/// Apply a `$set` update and return the updated invitation
///
/// Keys in [`INVALID_UPDATE_FIELDS`] are silently dropped; the nested
/// `boardInvitation` document is replaced whole.
pub async fn update_one(
    store: &Store,
    invitation_id: ObjectId,
    update: Document,
) -> Result<Option<Invitation>, mongodb::error::Error> {
    let mut fields = Document::new();
    for (key, value) in update {
        if !INVALID_UPDATE_FIELDS.contains(&key.as_str()) {
            fields.insert(key, value);
        }
    }

    collection(store)
        .find_one_and_update(doc! { "_id": invitation_id }, doc! { "$set": fields })
        .with_options(return_after())
        .await
}

/// Pipeline for the invitee's invitation listing
pub fn listing_pipeline(invitee_id: ObjectId) -> Vec<Document> {
    vec![
        doc! {
            "$match": {
                "inviteeId": invitee_id,
                "_destroy": false,
            }
        },
        doc! {
            "$lookup": {
                "from": USERS_COLLECTION,
                "localField": "inviterId",
                "foreignField": "_id",
                "as": "inviter",
                "pipeline": [{ "$project": { "password": 0, "verifyToken": 0 } }],
            }
        },
        doc! {
            "$lookup": {
                "from": USERS_COLLECTION,
                "localField": "inviteeId",
                "foreignField": "_id",
                "as": "invitee",
                "pipeline": [{ "$project": { "password": 0, "verifyToken": 0 } }],
            }
        },
        doc! {
            "$lookup": {
                "from": BOARDS_COLLECTION,
                "localField": "boardInvitation.boardId",
                "foreignField": "_id",
                "as": "board",
            }
        },
    ]
}

/// One row of the listing aggregation
///
/// Each `$lookup` lands as an array holding zero or one element;
/// converting to [`InvitationDetails`] keeps the first and turns an
/// empty array into `None`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvitationRow {
    #[serde(rename = "_id")]
    id: ObjectId,
    inviter_id: ObjectId,
    invitee_id: ObjectId,
    #[serde(rename = "type")]
    kind: InvitationKind,
    board_invitation: BoardInvitation,
    created_at: i64,
    #[serde(default)]
    updated_at: Option<i64>,
    #[serde(default, rename = "_destroy")]
    destroy: bool,
    #[serde(default)]
    inviter: Vec<PublicUser>,
    #[serde(default)]
    invitee: Vec<PublicUser>,
    #[serde(default)]
    board: Vec<Board>,
}

impl From<InvitationRow> for InvitationDetails {
    fn from(row: InvitationRow) -> Self {
        InvitationDetails {
            invitation: Invitation {
                id: row.id,
                inviter_id: row.inviter_id,
                invitee_id: row.invitee_id,
                kind: row.kind,
                board_invitation: row.board_invitation,
                created_at: row.created_at,
                updated_at: row.updated_at,
                destroy: row.destroy,
            },
            board: row.board.into_iter().next(),
            inviter: row.inviter.into_iter().next(),
            invitee: row.invitee.into_iter().next(),
        }
    }
}

/// Invitations targeting one user, newest join data included
pub async fn find_for_invitee(
    store: &Store,
    invitee_id: ObjectId,
) -> Result<Vec<InvitationDetails>, mongodb::error::Error> {
    let cursor = collection(store)
        .aggregate(listing_pipeline(invitee_id))
        .with_type::<InvitationRow>()
        .await?;

    cursor.map_ok(InvitationDetails::from).try_collect().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_update_fields_cover_identity() {
        for field in ["_id", "inviterId", "inviteeId", "type", "createdAt"] {
            assert!(INVALID_UPDATE_FIELDS.contains(&field));
        }
        assert!(!INVALID_UPDATE_FIELDS.contains(&"boardInvitation"));
    }

    #[test]
    fn test_listing_pipeline_shape() {
        let invitee = ObjectId::parse_str("65f1a2b3c4d5e6f7a8b9c0d1").unwrap();
        let pipeline = listing_pipeline(invitee);
        assert_eq!(pipeline.len(), 4);

        let matcher = pipeline[0].get_document("$match").unwrap();
        assert_eq!(matcher.get_object_id("inviteeId").unwrap(), invitee);
        assert!(!matcher.get_bool("_destroy").unwrap());

        for (stage, from, local_field) in [
            (&pipeline[1], "users", "inviterId"),
            (&pipeline[2], "users", "inviteeId"),
            (&pipeline[3], "boards", "boardInvitation.boardId"),
        ] {
            let lookup = stage.get_document("$lookup").unwrap();
            assert_eq!(lookup.get_str("from").unwrap(), from);
            assert_eq!(lookup.get_str("localField").unwrap(), local_field);
            assert_eq!(lookup.get_str("foreignField").unwrap(), "_id");
        }
    }

    #[test]
    fn test_row_conversion_flattens_single_element_lookups() {
        let row = InvitationRow {
            id: ObjectId::new(),
            inviter_id: ObjectId::new(),
            invitee_id: ObjectId::new(),
            kind: InvitationKind::BoardInvitation,
            board_invitation: BoardInvitation {
                board_id: ObjectId::new(),
                status: BoardInvitationStatus::Pending,
            },
            created_at: 0,
            updated_at: None,
            destroy: false,
            inviter: vec![],
            invitee: vec![],
            board: vec![],
        };

        let details: InvitationDetails = row.into();
        assert!(details.board.is_none());
        assert!(details.inviter.is_none());
        assert!(details.invitee.is_none());
    }
}
