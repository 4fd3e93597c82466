/**
 * Error Conversion
 *
 * This module provides conversion implementations for API errors,
 * allowing them to be converted to HTTP responses.
 *
 * # HTTP Response Conversion
 *
 * `ApiError` implements `IntoResponse` from Axum, allowing it to be
 * returned directly from handlers. The error is automatically converted to
 * an appropriate HTTP status code and response body.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "statusCode": 404,
 *   "message": "Board not found!"
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Json, Response},
    http::StatusCode,
};
use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// Server-side failures are logged here so that no 500 leaves the
    /// process unrecorded; client errors are logged at their origin.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {}", self);
        }

        let body = serde_json::json!({
            "statusCode": status.as_u16(),
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}
