/**
 * Card Handlers
 *
 * HTTP handlers for the `/v1/cards` routes. Card updates accept either
 * a JSON body or a multipart body carrying a `cardCover` file.
 */

use axum::{
    extract::{FromRequest, Multipart, Path, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use crate::cards::service;
use crate::cards::types::{Card, CreateCardRequest, UpdateCardRequest};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::providers::media::read_upload;
use crate::server::state::AppState;
use crate::validation::{require_object_id, Validate};

/// Handle `POST /v1/cards`
///
/// # Returns
///
/// `201 Created` with the new card, already appended to its column's
/// `cardOrderIds`.
pub async fn create_card(
    State(app_state): State<AppState>,
    Json(request): Json<CreateCardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("Create card request for column: {}", request.column_id);
    request.validate()?;

    let card = service::create(&app_state.store, request).await?;

    Ok((StatusCode::CREATED, Json(card)))
}

/// Handle `PUT /v1/cards/{id}`
///
/// Accepts either a JSON body (comment, membership change, or field
/// merge) or a multipart body with a `cardCover` file field.
pub async fn update_card(
    State(app_state): State<AppState>,
    AuthUser(current_user): AuthUser,
    Path(id): Path<String>,
    request: Request,
) -> Result<Json<Card>, ApiError> {
    let card_id = require_object_id(&id, "id")?;

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    let (body, cover) = if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(request, &app_state)
            .await
            .map_err(|e| {
                tracing::warn!("Invalid multipart request: {:?}", e);
                ApiError::validation("Invalid multipart request")
            })?;
        let cover = read_upload(&mut multipart, "cardCover").await?;
        (UpdateCardRequest::default(), cover)
    } else {
        let Json(body) = Json::<UpdateCardRequest>::from_request(request, &app_state)
            .await
            .map_err(|e| {
                tracing::warn!("Invalid card update body: {:?}", e);
                ApiError::validation("Invalid request body")
            })?;
        (body, None)
    };

    body.validate()?;

    let card = service::update(
        &app_state.store,
        &app_state.media,
        &current_user,
        card_id,
        body,
        cover,
    )
    .await?;

    Ok(Json(card))
}
