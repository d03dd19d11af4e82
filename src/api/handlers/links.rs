//! Handlers for link update and deletion.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{LinkResponse, UpdateLinkRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Rewrites an alias's target URL and expiry.
///
/// # Endpoint
///
/// `PUT /api/v1/{code}`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://new-destination.com",
///   "expiry": 48
/// }
/// ```
///
/// The new expiry counts from the time of this call, so updating an
/// expired link brings it back to life. The code and creation time never
/// change.
///
/// # Errors
///
/// - 404 if the code doesn't exist
/// - 400 if validation fails
pub async fn update_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let record = state
        .link_service
        .update(&code, payload.url, payload.expiry)
        .await?;

    let short_url = state.link_service.short_url(&state.base_url, &record.code);

    Ok(Json(LinkResponse::from_record(record, short_url)))
}

/// Deletes an alias.
///
/// # Endpoint
///
/// `DELETE /api/v1/{code}`
///
/// The record and its tags are removed; the code itself is retired and
/// can never be claimed again.
///
/// # Errors
///
/// Returns 404 if the code doesn't exist or was already deleted.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
