/**
 * Column Database Operations
 *
 * MongoDB operations for the `columns` collection. Callers build the
 * update documents; this layer strips protected fields and runs the
 * queries.
 */

use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use chrono::Utc;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;

use crate::cards::types::Card;
use crate::columns::types::Column;
use crate::store::Store;

pub const COLUMNS_COLLECTION: &str = "columns";

/// Fields an update may never touch
const INVALID_UPDATE_FIELDS: &[&str] = &["_id", "boardId", "createdAt"];

fn collection(store: &Store) -> Collection<Column> {
    store.collection(COLUMNS_COLLECTION)
}

fn return_after() -> FindOneAndUpdateOptions {
    FindOneAndUpdateOptions::builder()
        .return_document(ReturnDocument::After)
        .build()
}

/// Insert a new column on `board_id` and return its id
pub async fn insert_one(
    store: &Store,
    board_id: ObjectId,
    title: &str,
) -> Result<ObjectId, mongodb::error::Error> {
    let id = ObjectId::new();

    let document = doc! {
        "_id": id,
        "boardId": board_id,
        "title": title,
        "cardOrderIds": [],
        "createdAt": Utc::now().timestamp_millis(),
        "updatedAt": Bson::Null,
        "_destroy": false,
    };

    store
        .collection::<Document>(COLUMNS_COLLECTION)
        .insert_one(document)
        .await?;

    Ok(id)
}

/// Find a column by id
pub async fn find_one_by_id(
    store: &Store,
    id: ObjectId,
) -> Result<Option<Column>, mongodb::error::Error> {
    collection(store).find_one(doc! { "_id": id }).await
}

/// Apply a `$set` update and return the updated column
///
/// Keys in [`INVALID_UPDATE_FIELDS`] are silently dropped so an update
/// can never move a column between boards or rewrite its identity.
pub async fn update_one(
    store: &Store,
    column_id: ObjectId,
    update: Document,
) -> Result<Option<Column>, mongodb::error::Error> {
    let mut fields = Document::new();
    for (key, value) in update {
        if !INVALID_UPDATE_FIELDS.contains(&key.as_str()) {
            fields.insert(key, value);
        }
    }

    collection(store)
        .find_one_and_update(doc! { "_id": column_id }, doc! { "$set": fields })
        .with_options(return_after())
        .await
}

/// Delete the column document itself
///
/// Cards and the owning board's `columnOrderIds` entry are handled by
/// the caller before this runs.
pub async fn delete_one_by_id(
    store: &Store,
    column_id: ObjectId,
) -> Result<u64, mongodb::error::Error> {
    let result = collection(store)
        .delete_one(doc! { "_id": column_id })
        .await?;
    Ok(result.deleted_count)
}

/// Append a freshly created card to its column's `cardOrderIds`
pub async fn push_card_order_ids(
    store: &Store,
    card: &Card,
) -> Result<Option<Column>, mongodb::error::Error> {
    collection(store)
        .find_one_and_update(
            doc! { "_id": card.column_id },
            doc! { "$push": { "cardOrderIds": card.id } },
        )
        .with_options(return_after())
        .await
}
