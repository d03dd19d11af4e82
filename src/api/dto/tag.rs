//! DTOs for the tag endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/v1/tag`.
///
/// Field names mirror what the frontend sends (`shortID`).
#[derive(Debug, Deserialize, Validate)]
pub struct AddTagRequest {
    /// The short code the tag is attached to.
    #[serde(rename = "shortID")]
    #[validate(length(min = 1, message = "shortID must not be empty"))]
    pub short_id: String,

    /// The tag to add. Trimmed server-side; duplicates collapse.
    pub tag: String,
}

/// Response body: the full tag set after the add.
#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub tags: Vec<String>,
}
