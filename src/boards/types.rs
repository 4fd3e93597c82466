/**
 * Board Types
 *
 * The board record as stored in MongoDB, the aggregated details shape
 * returned by `GET /v1/boards/:id`, and the request/response bodies for
 * the board routes.
 */

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::cards::types::Card;
use crate::columns::types::ColumnWithCards;
use crate::error::ApiError;
use crate::store::json::{serialize_object_id, serialize_object_id_vec};
use crate::users::types::PublicUser;
use crate::validation::{require_length, require_object_id, require_object_id_vec, Validate};

/// Board visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardKind {
    Public,
    Private,
}

impl BoardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardKind::Public => "public",
            BoardKind::Private => "private",
        }
    }
}

/// Board record as stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(rename = "_id", serialize_with = "serialize_object_id")]
    pub id: ObjectId,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: BoardKind,
    #[serde(serialize_with = "serialize_object_id_vec")]
    pub owner_ids: Vec<ObjectId>,
    #[serde(serialize_with = "serialize_object_id_vec")]
    pub member_ids: Vec<ObjectId>,
    #[serde(serialize_with = "serialize_object_id_vec")]
    pub column_order_ids: Vec<ObjectId>,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default, rename = "_destroy")]
    pub destroy: bool,
}

/// Board with its related records, as returned by the details aggregation
///
/// `cards` holds the flat card list straight out of the pipeline; the
/// service distributes it into `columns` and it never reaches the
/// response body.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDetails {
    #[serde(rename = "_id", serialize_with = "serialize_object_id")]
    pub id: ObjectId,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: BoardKind,
    #[serde(serialize_with = "serialize_object_id_vec")]
    pub owner_ids: Vec<ObjectId>,
    #[serde(serialize_with = "serialize_object_id_vec")]
    pub member_ids: Vec<ObjectId>,
    #[serde(serialize_with = "serialize_object_id_vec")]
    pub column_order_ids: Vec<ObjectId>,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default, rename = "_destroy")]
    pub destroy: bool,
    #[serde(default)]
    pub owners: Vec<PublicUser>,
    #[serde(default)]
    pub members: Vec<PublicUser>,
    #[serde(default)]
    pub columns: Vec<ColumnWithCards>,
    #[serde(default, skip_serializing)]
    pub cards: Vec<Card>,
}

/// Body for `POST /v1/boards`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: BoardKind,
}

impl Validate for CreateBoardRequest {
    fn validate(&self) -> Result<(), ApiError> {
        require_length(&self.title, "title", 3, 50)?;
        if let Some(description) = &self.description {
            require_length(description, "description", 3, 256)?;
        }
        Ok(())
    }
}

/// Body for `PUT /v1/boards/:id`
///
/// Every field optional; `columnOrderIds` arrives as hex strings and is
/// converted to object ids before persisting.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<BoardKind>,
    pub column_order_ids: Option<Vec<String>>,
}

impl Validate for UpdateBoardRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if let Some(title) = &self.title {
            require_length(title, "title", 3, 50)?;
        }
        if let Some(description) = &self.description {
            require_length(description, "description", 3, 256)?;
        }
        if let Some(column_order_ids) = &self.column_order_ids {
            require_object_id_vec(column_order_ids, "columnOrderIds")?;
        }
        Ok(())
    }
}

/// Body for `PUT /v1/boards/supports/moving_card`
///
/// The client submits the final state of both columns' order arrays;
/// the server persists them verbatim.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardRequest {
    pub current_card_id: String,
    pub prev_column_id: String,
    pub prev_card_order_ids: Vec<String>,
    pub next_column_id: String,
    pub next_card_order_ids: Vec<String>,
}

impl Validate for MoveCardRequest {
    fn validate(&self) -> Result<(), ApiError> {
        require_object_id(&self.current_card_id, "currentCardId")?;
        require_object_id(&self.prev_column_id, "prevColumnId")?;
        require_object_id_vec(&self.prev_card_order_ids, "prevCardOrderIds")?;
        require_object_id(&self.next_column_id, "nextColumnId")?;
        require_object_id_vec(&self.next_card_order_ids, "nextCardOrderIds")?;
        Ok(())
    }
}

/// Query parameters for `GET /v1/boards`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBoardsQuery {
    pub page: Option<i64>,
    pub items_per_page: Option<i64>,
}

/// Response for `GET /v1/boards`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardListResponse {
    pub boards: Vec<Board>,
    pub total_boards: i64,
}

/// Response for `PUT /v1/boards/supports/moving_card`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardResponse {
    pub update_result: String,
}
