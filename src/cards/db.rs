/**
 * Card Database Operations
 *
 * MongoDB operations for the `cards` collection, including the two
 * array updates that never go through `$set`: comment prepends and
 * membership changes.
 */

use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use chrono::Utc;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;

use crate::cards::types::{Card, CardComment, MemberAction};
use crate::store::Store;

pub const CARDS_COLLECTION: &str = "cards";

/// Fields an update may never touch
const INVALID_UPDATE_FIELDS: &[&str] = &["_id", "boardId", "createdAt"];

fn collection(store: &Store) -> Collection<Card> {
    store.collection(CARDS_COLLECTION)
}

fn return_after() -> FindOneAndUpdateOptions {
    FindOneAndUpdateOptions::builder()
        .return_document(ReturnDocument::After)
        .build()
}

/// Insert a new card and return its id
pub async fn insert_one(
    store: &Store,
    board_id: ObjectId,
    column_id: ObjectId,
    title: &str,
) -> Result<ObjectId, mongodb::error::Error> {
    let id = ObjectId::new();

    let document = doc! {
        "_id": id,
        "boardId": board_id,
        "columnId": column_id,
        "title": title,
        "description": Bson::Null,
        "cover": Bson::Null,
        "memberIds": [],
        "comments": [],
        "createdAt": Utc::now().timestamp_millis(),
        "updatedAt": Bson::Null,
        "_destroy": false,
    };

    store
        .collection::<Document>(CARDS_COLLECTION)
        .insert_one(document)
        .await?;

    Ok(id)
}

/// Find a card by id
pub async fn find_one_by_id(
    store: &Store,
    id: ObjectId,
) -> Result<Option<Card>, mongodb::error::Error> {
    collection(store).find_one(doc! { "_id": id }).await
}

/// Apply a `$set` update and return the updated card
///
/// Keys in [`INVALID_UPDATE_FIELDS`] are silently dropped. The one
/// legitimate `columnId` rewrite (the cross-column move) goes through
/// here too, so `columnId` stays settable.
pub async fn update_one(
    store: &Store,
    card_id: ObjectId,
    update: Document,
) -> Result<Option<Card>, mongodb::error::Error> {
    let mut fields = Document::new();
    for (key, value) in update {
        if !INVALID_UPDATE_FIELDS.contains(&key.as_str()) {
            fields.insert(key, value);
        }
    }

    collection(store)
        .find_one_and_update(doc! { "_id": card_id }, doc! { "$set": fields })
        .with_options(return_after())
        .await
}

/// Prepend a comment to the card's thread
pub async fn unshift_new_comment(
    store: &Store,
    card_id: ObjectId,
    comment: &CardComment,
) -> Result<Option<Card>, mongodb::error::Error> {
    let comment_doc = doc! {
        "userId": comment.user_id,
        "userEmail": comment.user_email.as_str(),
        "userAvatar": comment.user_avatar.as_deref().map(Bson::from).unwrap_or(Bson::Null),
        "userDisplayName": comment.user_display_name.as_str(),
        "content": comment.content.as_str(),
        "commentedAt": comment.commented_at,
    };

    collection(store)
        .find_one_and_update(
            doc! { "_id": card_id },
            doc! { "$push": { "comments": { "$each": [comment_doc], "$position": 0 } } },
        )
        .with_options(return_after())
        .await
}

/// Add or remove one member on the card
pub async fn update_members(
    store: &Store,
    card_id: ObjectId,
    member_id: ObjectId,
    action: MemberAction,
) -> Result<Option<Card>, mongodb::error::Error> {
    let update = match action {
        MemberAction::Add => doc! { "$push": { "memberIds": member_id } },
        MemberAction::Remove => doc! { "$pull": { "memberIds": member_id } },
    };

    collection(store)
        .find_one_and_update(doc! { "_id": card_id }, update)
        .with_options(return_after())
        .await
}

/// Bulk-delete every card in a column, returning the count removed
pub async fn delete_many_by_column_id(
    store: &Store,
    column_id: ObjectId,
) -> Result<u64, mongodb::error::Error> {
    let result = collection(store)
        .delete_many(doc! { "columnId": column_id })
        .await?;
    Ok(result.deleted_count)
}
