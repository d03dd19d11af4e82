//! Handler for the tag endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::tag::{AddTagRequest, TagResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Adds a tag to an alias.
///
/// # Endpoint
///
/// `POST /api/v1/tag`
///
/// # Request Body
///
/// ```json
/// { "shortID": "abc123", "tag": "work" }
/// ```
///
/// The tag is trimmed; adding a duplicate is a no-op. The response carries
/// the full tag set after the add.
///
/// # Errors
///
/// - 400 if the trimmed tag is empty
/// - 404 if the code doesn't exist
pub async fn add_tag_handler(
    State(state): State<AppState>,
    Json(payload): Json<AddTagRequest>,
) -> Result<Json<TagResponse>, AppError> {
    payload.validate()?;

    let tags = state
        .link_service
        .add_tag(&payload.short_id, &payload.tag)
        .await?;

    Ok(Json(TagResponse { tags }))
}
