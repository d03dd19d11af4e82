//! Short code generation and validation utilities.

use crate::error::AppError;
use rand::distr::{Alphanumeric, SampleString};
use regex::Regex;
use std::sync::LazyLock;

/// Length of generated codes. 62^7 values keeps the collision probability
/// low under expected load while staying short enough to type.
const GENERATED_CODE_LENGTH: usize = 7;

/// Allowed shape of caller-supplied custom codes.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,32}$").unwrap());

/// Codes reserved for service routes, rejected as custom aliases.
const RESERVED_CODES: &[&str] = &["api", "health", "tag"];

/// Generates a random 7-character alphanumeric short code.
///
/// Collisions are possible and are handled by the caller's
/// check-and-insert retry loop, never assumed away.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), GENERATED_CODE_LENGTH)
}

/// Validates a caller-supplied custom short code.
///
/// # Rules
///
/// - Length: 1-32 characters
/// - Allowed characters: ASCII letters, digits, hyphen, underscore
/// - Cannot be a reserved route word
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Custom code must be 1-32 characters of letters, digits, hyphen, or underscore",
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(format!(
            "Custom code '{code}' is reserved"
        )));
    }

    Ok(())
}
