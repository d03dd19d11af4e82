//! DTOs for link update endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::LinkRecord;

/// Request body for `PUT /api/v1/{code}`.
///
/// Both fields are required: the update rewrites the target URL and
/// recomputes the expiry from the time of the call.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    /// New destination URL for this alias.
    #[validate(
        length(min = 1, message = "URL must not be empty"),
        url(message = "Invalid URL format")
    )]
    pub url: String,

    /// New expiry window in whole hours, counted from now.
    /// Capped at ten years to keep timestamp arithmetic in range.
    #[validate(range(
        min = 1,
        max = 87_600,
        message = "Expiry must be between 1 and 87600 hours"
    ))]
    pub expiry: i64,
}

/// JSON representation of a link returned after update.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl LinkResponse {
    pub fn from_record(record: LinkRecord, short_url: String) -> Self {
        Self {
            code: record.code,
            url: record.target_url,
            short_url,
            created_at: record.created_at,
            expires_at: record.expires_at,
        }
    }
}
