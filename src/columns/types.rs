/**
 * Column Types
 *
 * The column record as stored in MongoDB and the request/response
 * bodies for the column routes.
 */

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::cards::types::Card;
use crate::error::ApiError;
use crate::store::json::{serialize_object_id, serialize_object_id_vec};
use crate::validation::{require_length, require_object_id, require_object_id_vec, Validate};

/// Column record as stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(rename = "_id", serialize_with = "serialize_object_id")]
    pub id: ObjectId,
    #[serde(serialize_with = "serialize_object_id")]
    pub board_id: ObjectId,
    pub title: String,
    #[serde(default, serialize_with = "serialize_object_id_vec")]
    pub card_order_ids: Vec<ObjectId>,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default, rename = "_destroy")]
    pub destroy: bool,
}

/// Column with its cards embedded
///
/// The shape clients work with: the column-create response (with an
/// empty card list) and each column inside board details (filled by the
/// card distribution step).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnWithCards {
    #[serde(rename = "_id", serialize_with = "serialize_object_id")]
    pub id: ObjectId,
    #[serde(serialize_with = "serialize_object_id")]
    pub board_id: ObjectId,
    pub title: String,
    #[serde(default, serialize_with = "serialize_object_id_vec")]
    pub card_order_ids: Vec<ObjectId>,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default, rename = "_destroy")]
    pub destroy: bool,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl From<Column> for ColumnWithCards {
    fn from(column: Column) -> Self {
        Self {
            id: column.id,
            board_id: column.board_id,
            title: column.title,
            card_order_ids: column.card_order_ids,
            created_at: column.created_at,
            updated_at: column.updated_at,
            destroy: column.destroy,
            cards: vec![],
        }
    }
}

/// Body for `POST /v1/columns`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateColumnRequest {
    pub board_id: String,
    pub title: String,
}

impl Validate for CreateColumnRequest {
    fn validate(&self) -> Result<(), ApiError> {
        require_object_id(&self.board_id, "boardId")?;
        require_length(&self.title, "title", 3, 50)?;
        Ok(())
    }
}

/// Body for `PUT /v1/columns/:id`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColumnRequest {
    pub title: Option<String>,
    pub card_order_ids: Option<Vec<String>>,
}

impl Validate for UpdateColumnRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if let Some(title) = &self.title {
            require_length(title, "title", 3, 50)?;
        }
        if let Some(card_order_ids) = &self.card_order_ids {
            require_object_id_vec(card_order_ids, "cardOrderIds")?;
        }
        Ok(())
    }
}

/// Response for `DELETE /v1/columns/:id`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteColumnResponse {
    pub delete_result: String,
}
