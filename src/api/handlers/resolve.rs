//! Handler for alias resolution.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::shorten::ResolveResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short code to its target URL.
///
/// # Endpoint
///
/// `GET /api/v1/{code}`
///
/// The frontend's redirect page consumes this and performs the actual
/// navigation client-side, so the response is JSON rather than an HTTP
/// redirect.
///
/// # Errors
///
/// Returns 404 for unknown and expired codes alike; the two cases are
/// deliberately indistinguishable.
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let record = state.link_service.resolve(&code).await?;

    Ok(Json(ResolveResponse {
        url: record.target_url,
    }))
}
