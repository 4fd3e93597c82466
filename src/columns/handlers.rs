/**
 * Column Handlers
 *
 * HTTP handlers for the `/v1/columns` routes. All of them sit behind
 * the authentication middleware.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::columns::service;
use crate::columns::types::{
    Column, CreateColumnRequest, DeleteColumnResponse, UpdateColumnRequest,
};
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::{require_object_id, Validate};

/// Handle `POST /v1/columns`
///
/// # Returns
///
/// `201 Created` with the new column carrying an empty card list,
/// already appended to its board's `columnOrderIds`.
pub async fn create_column(
    State(app_state): State<AppState>,
    Json(request): Json<CreateColumnRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("Create column request for board: {}", request.board_id);
    request.validate()?;

    let column = service::create(&app_state.store, request).await?;

    Ok((StatusCode::CREATED, Json(column)))
}

/// Handle `PUT /v1/columns/{id}`
pub async fn update_column(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateColumnRequest>,
) -> Result<Json<Column>, ApiError> {
    let column_id = require_object_id(&id, "id")?;
    request.validate()?;

    let column = service::update(&app_state.store, column_id, request).await?;

    Ok(Json(column))
}

/// Handle `DELETE /v1/columns/{id}`
///
/// Removes the column, its cards, and its entry in the board's order.
pub async fn delete_column(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteColumnResponse>, ApiError> {
    let column_id = require_object_id(&id, "id")?;
    tracing::info!("Delete column request: {}", column_id);

    let response = service::delete(&app_state.store, column_id).await?;

    Ok(Json(response))
}
