//! Handler for the health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Returns service liveness.
///
/// # Endpoint
///
/// `GET /health`
///
/// The store is in-process, so reaching the handler at all means the
/// service is healthy.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
