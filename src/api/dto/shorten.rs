//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/v1`.
///
/// `short` is the optional custom code; the original frontend sends an
/// empty string when the field is left blank, which means "generate one".
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten (must be a valid absolute HTTP/HTTPS URL).
    #[validate(
        length(min = 1, message = "URL must not be empty"),
        url(message = "Invalid URL format")
    )]
    pub url: String,

    /// Optional custom short code. Empty string means auto-generate.
    #[serde(default)]
    pub short: Option<String>,

    /// Expiry window in whole hours, counted from the time of this call.
    /// Capped at ten years to keep timestamp arithmetic in range.
    #[validate(range(
        min = 1,
        max = 87_600,
        message = "Expiry must be between 1 and 87600 hours"
    ))]
    pub expiry: i64,
}

/// Response body: the full short URL for the new alias.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short: String,
}

/// Response body for `GET /api/v1/{code}`.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub url: String,
}
