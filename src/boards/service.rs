/**
 * Board Service
 *
 * Business rules for boards: slug generation on create, the card
 * distribution step behind board details, pagination defaults for the
 * listing, partial updates, and the card move protocol.
 */

use bson::oid::ObjectId;
use bson::Document;
use chrono::Utc;

use crate::boards::db;
use crate::boards::types::{
    Board, BoardDetails, BoardListResponse, CreateBoardRequest, ListBoardsQuery, MoveCardRequest,
    MoveCardResponse, UpdateBoardRequest,
};
use crate::cards;
use crate::columns;
use crate::error::ApiError;
use crate::store::Store;
use crate::validation::{require_object_id, require_object_id_vec};

/// Turn a board title into a URL-friendly slug
///
/// Lowercases, keeps ASCII alphanumerics, and collapses everything else
/// into single dashes with none left at either end.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Create a board owned by the caller
pub async fn create(
    store: &Store,
    user_id: ObjectId,
    request: CreateBoardRequest,
) -> Result<Board, ApiError> {
    let slug = slugify(&request.title);

    let id = db::insert_one(
        store,
        &request.title,
        &slug,
        request.description.as_deref(),
        request.kind,
        user_id,
    )
    .await?;

    let created = db::find_one_by_id(store, id)
        .await?
        .ok_or_else(|| ApiError::internal("Failed to load created board"))?;

    Ok(created)
}

/// Assemble one board with its columns, cards, owners and members
///
/// Outsiders and missing boards are indistinguishable: both produce the
/// same not-found.
pub async fn get_details(
    store: &Store,
    board_id: ObjectId,
    user_id: ObjectId,
) -> Result<BoardDetails, ApiError> {
    let mut board = db::find_details(store, board_id, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Board not found!"))?;

    distribute_cards(&mut board);

    Ok(board)
}

/// Move the flat card list from the aggregation into its columns
///
/// Pipeline order is preserved within each column; cards pointing at a
/// column that is not in the result are dropped.
fn distribute_cards(board: &mut BoardDetails) {
    let cards = std::mem::take(&mut board.cards);
    for card in cards {
        if let Some(column) = board
            .columns
            .iter_mut()
            .find(|column| column.id == card.column_id)
        {
            column.cards.push(card);
        }
    }
}

/// Page of boards the caller owns or belongs to
pub async fn list(
    store: &Store,
    user_id: ObjectId,
    query: ListBoardsQuery,
) -> Result<BoardListResponse, ApiError> {
    let page = query.page.unwrap_or(db::DEFAULT_PAGE);
    let items_per_page = query.items_per_page.unwrap_or(db::DEFAULT_ITEMS_PER_PAGE);

    Ok(db::find_for_user(store, user_id, page, items_per_page).await?)
}

/// Apply a partial update to a board
pub async fn update(
    store: &Store,
    board_id: ObjectId,
    request: UpdateBoardRequest,
) -> Result<Board, ApiError> {
    let mut update = Document::new();
    if let Some(title) = &request.title {
        update.insert("title", title.clone());
    }
    if let Some(description) = &request.description {
        update.insert("description", description.clone());
    }
    if let Some(kind) = request.kind {
        update.insert("type", kind.as_str());
    }
    if let Some(column_order_ids) = &request.column_order_ids {
        let ids = require_object_id_vec(column_order_ids, "columnOrderIds")?;
        update.insert("columnOrderIds", ids);
    }
    update.insert("updatedAt", Utc::now().timestamp_millis());

    let updated = db::update_one(store, board_id, update)
        .await?
        .ok_or_else(|| ApiError::not_found("Board not found!"))?;

    Ok(updated)
}

/// Persist a card move between (or within) columns
///
/// The client submits both columns' final order arrays and they are
/// stored verbatim. The three writes are independent: a concurrent move
/// can interleave between them and the last writer wins, which is
/// accepted for drag-and-drop.
pub async fn move_card(
    store: &Store,
    request: MoveCardRequest,
) -> Result<MoveCardResponse, ApiError> {
    let card_id = require_object_id(&request.current_card_id, "currentCardId")?;
    let prev_column_id = require_object_id(&request.prev_column_id, "prevColumnId")?;
    let next_column_id = require_object_id(&request.next_column_id, "nextColumnId")?;
    let prev_card_order_ids =
        require_object_id_vec(&request.prev_card_order_ids, "prevCardOrderIds")?;
    let next_card_order_ids =
        require_object_id_vec(&request.next_card_order_ids, "nextCardOrderIds")?;

    columns::db::update_one(
        store,
        prev_column_id,
        bson::doc! {
            "cardOrderIds": prev_card_order_ids,
            "updatedAt": Utc::now().timestamp_millis(),
        },
    )
    .await?;

    columns::db::update_one(
        store,
        next_column_id,
        bson::doc! {
            "cardOrderIds": next_card_order_ids,
            "updatedAt": Utc::now().timestamp_millis(),
        },
    )
    .await?;

    if prev_column_id != next_column_id {
        cards::db::update_one(store, card_id, bson::doc! { "columnId": next_column_id }).await?;
    }

    Ok(MoveCardResponse {
        update_result: "Successfully!".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::types::BoardKind;
    use crate::cards::types::Card;
    use crate::columns::types::ColumnWithCards;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Sprint 12 -- Planning!  "), "sprint-12-planning");
        assert_eq!(slugify("ALL CAPS"), "all-caps");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }

    fn oid(suffix: u8) -> ObjectId {
        ObjectId::parse_str(format!("65f1a2b3c4d5e6f7a8b9c0{suffix:02x}")).unwrap()
    }

    fn card(id: ObjectId, column_id: ObjectId, title: &str) -> Card {
        Card {
            id,
            board_id: oid(0xaa),
            column_id,
            title: title.to_string(),
            description: None,
            cover: None,
            member_ids: vec![],
            comments: vec![],
            created_at: 0,
            updated_at: None,
            destroy: false,
        }
    }

    fn column(id: ObjectId) -> ColumnWithCards {
        ColumnWithCards {
            id,
            board_id: oid(0xaa),
            title: "todo".to_string(),
            card_order_ids: vec![],
            created_at: 0,
            updated_at: None,
            destroy: false,
            cards: vec![],
        }
    }

    #[test]
    fn test_distribute_cards_groups_by_column() {
        let col_a = oid(1);
        let col_b = oid(2);
        let mut board = BoardDetails {
            id: oid(0xaa),
            title: "Roadmap".to_string(),
            slug: "roadmap".to_string(),
            description: None,
            kind: BoardKind::Private,
            owner_ids: vec![],
            member_ids: vec![],
            column_order_ids: vec![col_a, col_b],
            created_at: 0,
            updated_at: None,
            destroy: false,
            owners: vec![],
            members: vec![],
            columns: vec![column(col_a), column(col_b)],
            cards: vec![
                card(oid(0x10), col_a, "first"),
                card(oid(0x11), col_b, "second"),
                card(oid(0x12), col_a, "third"),
                card(oid(0x13), oid(0x7f), "orphan"),
            ],
        };

        distribute_cards(&mut board);

        assert!(board.cards.is_empty());
        let titles_a: Vec<_> = board.columns[0]
            .cards
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        let titles_b: Vec<_> = board.columns[1]
            .cards
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles_a, vec!["first", "third"]);
        assert_eq!(titles_b, vec!["second"]);
    }
}
