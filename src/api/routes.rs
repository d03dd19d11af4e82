//! API route configuration.

use crate::api::handlers::{
    add_tag_handler, delete_link_handler, resolve_handler, shorten_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `POST   /`        - Create a short alias
/// - `POST   /tag`     - Add a tag to an alias
/// - `GET    /{code}`  - Resolve an alias to its target URL
/// - `PUT    /{code}`  - Rewrite target URL and expiry
/// - `DELETE /{code}`  - Delete an alias
///
/// The static `/tag` segment takes priority over the `{code}` capture, so
/// "tag" is also a reserved word in custom code validation.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shorten_handler))
        .route("/tag", post(add_tag_handler))
        .route(
            "/{code}",
            get(resolve_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
}
