/**
 * API Route Handlers
 *
 * The `/v1` route table. Public routes cover the liveness probe and the
 * account flows that run before a session exists; every other route is
 * wrapped in the access-token middleware.
 *
 * # Routes
 *
 * ## Public
 * - `GET /v1/status` - Liveness probe
 * - `POST /v1/users/register` - Account registration
 * - `PUT /v1/users/verify` - Email verification
 * - `POST /v1/users/login` - Login, sets session cookies
 * - `DELETE /v1/users/logout` - Logout, clears session cookies
 * - `GET /v1/users/refresh_token` - New access token from refresh cookie
 *
 * ## Protected (access token required)
 * - `PUT /v1/users/update` - Account update (JSON or avatar multipart)
 * - `GET|POST /v1/boards` - Board listing / creation
 * - `GET|PUT /v1/boards/{id}` - Board details / update
 * - `PUT /v1/boards/supports/moving_card` - Cross-column card move
 * - `POST /v1/columns`, `PUT|DELETE /v1/columns/{id}`
 * - `POST /v1/cards`, `PUT /v1/cards/{id}`
 * - `GET /v1/invitations` - Invitations addressed to the caller
 * - `POST /v1/invitations/board` - Invite a user to a board
 * - `PUT /v1/invitations/board/{invitationId}` - Accept or reject
 */

use axum::routing::{delete, get, post, put};
use axum::{middleware, Json, Router};
use serde_json::json;

use crate::middleware::auth_middleware;
use crate::server::state::AppState;
use crate::{boards, cards, columns, invitations, users};

/// Handle `GET /v1/status`
async fn status() -> Json<serde_json::Value> {
    Json(json!({ "message": "APIs V1 are ready to use." }))
}

/// Build the `/v1` route table
///
/// # Arguments
///
/// * `app_state` - Application state, also captured by the token
///   middleware guarding the protected half of the table
pub fn configure_api_routes(app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/users/update", put(users::handlers::update))
        .route(
            "/boards",
            get(boards::handlers::get_boards).post(boards::handlers::create_board),
        )
        .route(
            "/boards/supports/moving_card",
            put(boards::handlers::move_card),
        )
        .route(
            "/boards/{id}",
            get(boards::handlers::get_board_details).put(boards::handlers::update_board),
        )
        .route("/columns", post(columns::handlers::create_column))
        .route(
            "/columns/{id}",
            put(columns::handlers::update_column).delete(columns::handlers::delete_column),
        )
        .route("/cards", post(cards::handlers::create_card))
        .route("/cards/{id}", put(cards::handlers::update_card))
        .route("/invitations", get(invitations::handlers::get_invitations))
        .route(
            "/invitations/board",
            post(invitations::handlers::create_invitation),
        )
        .route(
            "/invitations/board/{invitationId}",
            put(invitations::handlers::update_invitation),
        )
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware));

    Router::new()
        .route("/status", get(status))
        .route("/users/register", post(users::handlers::register))
        .route("/users/verify", put(users::handlers::verify_account))
        .route("/users/login", post(users::handlers::login))
        .route("/users/logout", delete(users::handlers::logout))
        .route("/users/refresh_token", get(users::handlers::refresh_token))
        .merge(protected)
}
