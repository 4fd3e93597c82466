/**
 * Board Handlers
 *
 * HTTP handlers for the `/v1/boards` routes. All of them sit behind the
 * authentication middleware; the caller's id comes from the verified
 * access token via the `AuthUser` extractor.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::boards::service;
use crate::boards::types::{
    Board, BoardDetails, BoardListResponse, CreateBoardRequest, ListBoardsQuery, MoveCardRequest,
    MoveCardResponse, UpdateBoardRequest,
};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::state::AppState;
use crate::validation::{require_object_id, Validate};

/// Handle `POST /v1/boards`
///
/// # Arguments
///
/// * `State(app_state)` - Application state
/// * `AuthUser(current_user)` - Caller identity from the access token
/// * `Json(request)` - Title, optional description, and visibility
///
/// # Returns
///
/// `201 Created` with the new board, owned by the caller
pub async fn create_board(
    State(app_state): State<AppState>,
    AuthUser(current_user): AuthUser,
    Json(request): Json<CreateBoardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("Create board request from user: {}", current_user.id);
    request.validate()?;

    let board = service::create(&app_state.store, current_user.id, request).await?;

    Ok((StatusCode::CREATED, Json(board)))
}

/// Handle `GET /v1/boards`
///
/// Paginated listing of boards the caller owns or belongs to.
pub async fn get_boards(
    State(app_state): State<AppState>,
    AuthUser(current_user): AuthUser,
    Query(query): Query<ListBoardsQuery>,
) -> Result<Json<BoardListResponse>, ApiError> {
    let response = service::list(&app_state.store, current_user.id, query).await?;

    Ok(Json(response))
}

/// Handle `GET /v1/boards/{id}`
///
/// Full board details: columns with their cards, owners and members.
pub async fn get_board_details(
    State(app_state): State<AppState>,
    AuthUser(current_user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<BoardDetails>, ApiError> {
    let board_id = require_object_id(&id, "id")?;

    let board = service::get_details(&app_state.store, board_id, current_user.id).await?;

    Ok(Json(board))
}

/// Handle `PUT /v1/boards/{id}`
pub async fn update_board(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateBoardRequest>,
) -> Result<Json<Board>, ApiError> {
    let board_id = require_object_id(&id, "id")?;
    request.validate()?;

    let board = service::update(&app_state.store, board_id, request).await?;

    Ok(Json(board))
}

/// Handle `PUT /v1/boards/supports/moving_card`
pub async fn move_card(
    State(app_state): State<AppState>,
    Json(request): Json<MoveCardRequest>,
) -> Result<Json<MoveCardResponse>, ApiError> {
    tracing::info!(
        "Move card {} from column {} to column {}",
        request.current_card_id,
        request.prev_column_id,
        request.next_column_id
    );
    request.validate()?;

    let response = service::move_card(&app_state.store, request).await?;

    Ok(Json(response))
}
