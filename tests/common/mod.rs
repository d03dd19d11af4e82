#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use chrono::{Duration, Utc};
use url_alias::api::handlers::{
    add_tag_handler, delete_link_handler, resolve_handler, shorten_handler, update_link_handler,
};
use url_alias::application::services::LinkService;
use url_alias::domain::entities::LinkRecord;
use url_alias::domain::repositories::AliasStore;
use url_alias::infrastructure::persistence::{MemoryAliasStore, MemoryTagIndex};
use url_alias::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Builds an [`AppState`] over fresh in-memory storage, returning the
/// store handle so tests can seed records directly.
pub fn create_test_state() -> (AppState, Arc<MemoryAliasStore>) {
    let store = Arc::new(MemoryAliasStore::new());
    let tags = Arc::new(MemoryTagIndex::new());

    let link_service = Arc::new(LinkService::new(store.clone(), tags));

    let state = AppState {
        link_service,
        base_url: TEST_BASE_URL.to_string(),
    };

    (state, store)
}

/// Full `/api/v1` route table for handler tests.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1", post(shorten_handler))
        .route("/api/v1/tag", post(add_tag_handler))
        .route(
            "/api/v1/{code}",
            get(resolve_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
        .with_state(state)
}

pub async fn insert_link(store: &MemoryAliasStore, code: &str, url: &str, expiry_hours: i64) {
    let now = Utc::now();
    store
        .create_if_absent(LinkRecord::new(
            code.to_string(),
            url.to_string(),
            now,
            now + Duration::hours(expiry_hours),
        ))
        .await
        .unwrap();
}

/// Seeds a record whose expiry already passed, as if the clock had
/// advanced beyond its window.
pub async fn insert_expired_link(store: &MemoryAliasStore, code: &str, url: &str) {
    let now = Utc::now();
    store
        .create_if_absent(LinkRecord::new(
            code.to_string(),
            url.to_string(),
            now - Duration::hours(2),
            now - Duration::hours(1),
        ))
        .await
        .unwrap();
}
