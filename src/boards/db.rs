/**
 * Board Database Operations
 *
 * MongoDB operations for the `boards` collection, including the two
 * aggregation pipelines behind board details and the paginated listing.
 * Pipelines are built by pure functions so their shapes are testable
 * without a running database.
 */

use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::options::{AggregateOptions, Collation, FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;
use serde::Deserialize;

use crate::boards::types::{Board, BoardDetails, BoardKind, BoardListResponse};
use crate::cards::db::CARDS_COLLECTION;
use crate::columns::db::COLUMNS_COLLECTION;
use crate::columns::types::Column;
use crate::store::Store;
use crate::users::db::USERS_COLLECTION;

pub const BOARDS_COLLECTION: &str = "boards";

/// Paging defaults for the board listing
pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_ITEMS_PER_PAGE: i64 = 12;

/// Fields an update may never touch
const INVALID_UPDATE_FIELDS: &[&str] = &["_id", "createdAt"];

fn collection(store: &Store) -> Collection<Board> {
    store.collection(BOARDS_COLLECTION)
}

fn return_after() -> FindOneAndUpdateOptions {
    FindOneAndUpdateOptions::builder()
        .return_document(ReturnDocument::After)
        .build()
}

/// Insert a new board owned by `owner_id` and return its id
pub async fn insert_one(
    store: &Store,
    title: &str,
    slug: &str,
    description: Option<&str>,
    kind: BoardKind,
    owner_id: ObjectId,
) -> Result<ObjectId, mongodb::error::Error> {
    let id = ObjectId::new();

    let document = doc! {
        "_id": id,
        "title": title,
        "slug": slug,
        "description": description.map(Bson::from).unwrap_or(Bson::Null),
        "type": kind.as_str(),
        "ownerIds": [owner_id],
        "memberIds": [],
        "columnOrderIds": [],
        "createdAt": Utc::now().timestamp_millis(),
        "updatedAt": Bson::Null,
        "_destroy": false,
    };

    store
        .collection::<Document>(BOARDS_COLLECTION)
        .insert_one(document)
        .await?;

    Ok(id)
}

/// Find a board by id (point read, no membership or soft-delete filter)
pub async fn find_one_by_id(
    store: &Store,
    id: ObjectId,
) -> Result<Option<Board>, mongodb::error::Error> {
    collection(store).find_one(doc! { "_id": id }).await
}

/// Pipeline for the board details aggregation
///
/// Authorization is folded into the `$match`: a caller who is neither
/// owner nor member gets no row, indistinguishable from a missing board.
pub fn details_pipeline(board_id: ObjectId, user_id: ObjectId) -> Vec<Document> {
    vec![
        doc! {
            "$match": {
                "$and": [
                    { "_id": board_id },
                    { "_destroy": false },
                    { "$or": [
                        { "ownerIds": { "$all": [user_id] } },
                        { "memberIds": { "$all": [user_id] } },
                    ]},
                ]
            }
        },
        doc! {
            "$lookup": {
                "from": USERS_COLLECTION,
                "localField": "ownerIds",
                "foreignField": "_id",
                "as": "owners",
                "pipeline": [{ "$project": { "password": 0, "verifyToken": 0 } }],
            }
        },
        doc! {
            "$lookup": {
                "from": USERS_COLLECTION,
                "localField": "memberIds",
                "foreignField": "_id",
                "as": "members",
                "pipeline": [{ "$project": { "password": 0, "verifyToken": 0 } }],
            }
        },
        doc! {
            "$lookup": {
                "from": COLUMNS_COLLECTION,
                "localField": "_id",
                "foreignField": "boardId",
                "as": "columns",
            }
        },
        doc! {
            "$lookup": {
                "from": CARDS_COLLECTION,
                "localField": "_id",
                "foreignField": "boardId",
                "as": "cards",
            }
        },
    ]
}

/// Run the details aggregation for one board as seen by one user
pub async fn find_details(
    store: &Store,
    board_id: ObjectId,
    user_id: ObjectId,
) -> Result<Option<BoardDetails>, mongodb::error::Error> {
    let mut cursor = collection(store)
        .aggregate(details_pipeline(board_id, user_id))
        .with_type::<BoardDetails>()
        .await?;

    cursor.try_next().await
}

/// Skip value for 1-based pagination
///
/// Non-positive inputs fall back to 0 so a crafted query string cannot
/// produce a negative skip.
pub fn paging_skip_value(page: i64, items_per_page: i64) -> i64 {
    if page <= 0 || items_per_page <= 0 {
        return 0;
    }
    (page - 1) * items_per_page
}

/// Pipeline for the paginated board listing
pub fn list_pipeline(user_id: ObjectId, page: i64, items_per_page: i64) -> Vec<Document> {
    vec![
        doc! {
            "$match": {
                "$and": [
                    { "_destroy": false },
                    { "$or": [
                        { "ownerIds": { "$all": [user_id] } },
                        { "memberIds": { "$all": [user_id] } },
                    ]},
                ]
            }
        },
        doc! { "$sort": { "title": 1 } },
        doc! {
            "$facet": {
                "queryBoards": [
                    { "$skip": paging_skip_value(page, items_per_page) },
                    { "$limit": items_per_page },
                ],
                "queryTotalBoards": [{ "$count": "countedAllBoards" }],
            }
        },
    ]
}

/// One row of the `$facet` stage in the listing pipeline
#[derive(Debug, Default, Deserialize)]
struct BoardListFacetRow {
    #[serde(rename = "queryBoards", default)]
    boards: Vec<Board>,
    #[serde(rename = "queryTotalBoards", default)]
    totals: Vec<BoardCount>,
}

#[derive(Debug, Deserialize)]
struct BoardCount {
    #[serde(rename = "countedAllBoards")]
    counted_all_boards: i64,
}

/// Page of boards the user owns or belongs to, with the total count
///
/// Sorted by title ascending under the case-insensitive `en` collation,
/// so "B" does not sort before "a".
pub async fn find_for_user(
    store: &Store,
    user_id: ObjectId,
    page: i64,
    items_per_page: i64,
) -> Result<BoardListResponse, mongodb::error::Error> {
    let options = AggregateOptions::builder()
        .collation(Collation::builder().locale("en").build())
        .build();

    let mut cursor = collection(store)
        .aggregate(list_pipeline(user_id, page, items_per_page))
        .with_options(options)
        .with_type::<BoardListFacetRow>()
        .await?;

    let row = cursor.try_next().await?.unwrap_or_default();

    Ok(BoardListResponse {
        boards: row.boards,
        total_boards: row
            .totals
            .first()
            .map(|count| count.counted_all_boards)
            .unwrap_or(0),
    })
}

/// Apply a `$set` update and return the updated board
pub async fn update_one(
    store: &Store,
    board_id: ObjectId,
    update: Document,
) -> Result<Option<Board>, mongodb::error::Error> {
    let mut fields = Document::new();
    for (key, value) in update {
        if !INVALID_UPDATE_FIELDS.contains(&key.as_str()) {
            fields.insert(key, value);
        }
    }

    collection(store)
        .find_one_and_update(doc! { "_id": board_id }, doc! { "$set": fields })
        .with_options(return_after())
        .await
}

/// Append a newly created column to its board's order array
pub async fn push_column_order_ids(
    store: &Store,
    column: &Column,
) -> Result<Option<Board>, mongodb::error::Error> {
    collection(store)
        .find_one_and_update(
            doc! { "_id": column.board_id },
            doc! { "$push": { "columnOrderIds": column.id } },
        )
        .with_options(return_after())
        .await
}

/// Remove a deleted column from its board's order array
pub async fn pull_column_order_ids(
    store: &Store,
    column: &Column,
) -> Result<Option<Board>, mongodb::error::Error> {
    collection(store)
        .find_one_and_update(
            doc! { "_id": column.board_id },
            doc! { "$pull": { "columnOrderIds": column.id } },
        )
        .with_options(return_after())
        .await
}

/// Add a user to a board's members exactly once
pub async fn push_member_ids(
    store: &Store,
    board_id: ObjectId,
    user_id: ObjectId,
) -> Result<Option<Board>, mongodb::error::Error> {
    collection(store)
        .find_one_and_update(
            doc! { "_id": board_id },
            doc! { "$addToSet": { "memberIds": user_id } },
        )
        .with_options(return_after())
        .await
}
