/**
 * Column Service
 *
 * Business rules for columns: create registers the new column in its
 * board's order array, update applies partial edits, and delete
 * cascades to the column's cards before removing the column.
 */

use bson::oid::ObjectId;
use bson::Document;
use chrono::Utc;

use crate::boards;
use crate::cards;
use crate::columns::db;
use crate::columns::types::{
    Column, ColumnWithCards, CreateColumnRequest, DeleteColumnResponse, UpdateColumnRequest,
};
use crate::error::ApiError;
use crate::store::Store;
use crate::validation::{require_object_id, require_object_id_vec};

/// Create a column and append it to its board's `columnOrderIds`
pub async fn create(
    store: &Store,
    request: CreateColumnRequest,
) -> Result<ColumnWithCards, ApiError> {
    let board_id = require_object_id(&request.board_id, "boardId")?;

    let id = db::insert_one(store, board_id, &request.title).await?;

    let created = db::find_one_by_id(store, id)
        .await?
        .ok_or_else(|| ApiError::internal("Failed to load created column"))?;

    boards::db::push_column_order_ids(store, &created).await?;

    Ok(created.into())
}

/// Apply a partial update to a column
pub async fn update(
    store: &Store,
    column_id: ObjectId,
    request: UpdateColumnRequest,
) -> Result<Column, ApiError> {
    let mut update = Document::new();
    if let Some(title) = &request.title {
        update.insert("title", title.clone());
    }
    if let Some(card_order_ids) = &request.card_order_ids {
        let ids = require_object_id_vec(card_order_ids, "cardOrderIds")?;
        update.insert("cardOrderIds", ids);
    }
    update.insert("updatedAt", Utc::now().timestamp_millis());

    let updated = db::update_one(store, column_id, update)
        .await?
        .ok_or_else(|| ApiError::not_found("Column not found!"))?;

    Ok(updated)
}

/// Delete a column and everything referencing it
///
/// Order matters: the column's cards are removed first, then the
/// board's `columnOrderIds` entry, then the column document itself.
pub async fn delete(
    store: &Store,
    column_id: ObjectId,
) -> Result<DeleteColumnResponse, ApiError> {
    let column = db::find_one_by_id(store, column_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Column not found!"))?;

    cards::db::delete_many_by_column_id(store, column_id).await?;
    boards::db::pull_column_order_ids(store, &column).await?;
    db::delete_one_by_id(store, column_id).await?;

    Ok(DeleteColumnResponse {
        delete_result: "Column and its Cards deleted successfully!".to_string(),
    })
}
