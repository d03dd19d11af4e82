use std::sync::Arc;

use crate::application::services::LinkService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Public base URL prepended to short codes in responses.
    pub base_url: String,
}
