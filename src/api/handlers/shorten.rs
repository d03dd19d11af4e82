//! Handler for the shorten endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short alias for a URL.
///
/// # Endpoint
///
/// `POST /api/v1`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "short": "my-link",   // optional; "" or absent means auto-generate
///   "expiry": 24          // hours, minimum 1
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "short": "https://s.example.com/my-link" }
/// ```
///
/// # Errors
///
/// - 400 if the URL, expiry, or custom code is invalid
/// - 409 if the custom code is already taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let record = state
        .link_service
        .shorten(payload.url, payload.short, payload.expiry)
        .await?;

    let short = state.link_service.short_url(&state.base_url, &record.code);

    Ok(Json(ShortenResponse { short }))
}
