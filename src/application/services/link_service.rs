//! Alias lifecycle orchestration service.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::{LinkRecord, LinkUpdate};
use crate::domain::repositories::{AliasStore, TagIndex};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_normalizer::normalize_url;

/// Collision retry budget for generated codes. Exhausting it means the
/// code space is undersized for the load, so it surfaces as a server
/// error rather than a validation failure.
const MAX_GENERATE_ATTEMPTS: usize = 5;

/// Upper bound on the expiry window, in hours (ten years). Keeps the
/// timestamp arithmetic in range; `chrono` durations panic far past this.
const MAX_EXPIRY_HOURS: i64 = 87_600;

/// Orchestrates alias creation, resolution, mutation, deletion, and
/// tagging.
///
/// The service is stateless; the store is the single source of truth and
/// every request reads fresh state. Expiry is evaluated here at read time
/// against the wall clock.
pub struct LinkService {
    store: Arc<dyn AliasStore>,
    tags: Arc<dyn TagIndex>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(store: Arc<dyn AliasStore>, tags: Arc<dyn TagIndex>) -> Self {
        Self { store, tags }
    }

    /// Creates a short alias for a target URL.
    ///
    /// An empty or absent `custom_code` means "generate one". Custom codes
    /// get a single insert attempt and the store's conflict is surfaced
    /// verbatim; generated codes retry on collision up to
    /// [`MAX_GENERATE_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for a malformed URL, non-positive expiry,
    ///   or invalid custom code
    /// - [`AppError::Conflict`] if a custom code is already taken
    /// - [`AppError::NamespaceExhausted`] if generation keeps colliding
    pub async fn shorten(
        &self,
        url: String,
        custom_code: Option<String>,
        expiry_hours: i64,
    ) -> Result<LinkRecord, AppError> {
        let target_url = normalize_url(&url)
            .map_err(|e| AppError::bad_request(format!("Invalid URL: {e}")))?;
        let expires_in = validate_expiry(expiry_hours)?;

        let now = Utc::now();
        let custom = custom_code.filter(|code| !code.is_empty());

        if let Some(code) = custom {
            validate_custom_code(&code)?;

            let record = LinkRecord::new(code, target_url, now, now + expires_in);
            self.store.create_if_absent(record.clone()).await?;
            return Ok(record);
        }

        for _ in 0..MAX_GENERATE_ATTEMPTS {
            let record = LinkRecord::new(
                generate_code(),
                target_url.clone(),
                now,
                now + expires_in,
            );

            match self.store.create_if_absent(record.clone()).await {
                Ok(()) => return Ok(record),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = MAX_GENERATE_ATTEMPTS,
            "short code generation exhausted its retry budget"
        );
        Err(AppError::NamespaceExhausted {
            attempts: MAX_GENERATE_ATTEMPTS,
        })
    }

    /// Resolves a live alias to its target URL.
    ///
    /// Expired records answer exactly like absent ones, so callers cannot
    /// tell whether a code ever existed. Resolution has no side effects
    /// observable to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown or expired codes.
    pub async fn resolve(&self, code: &str) -> Result<LinkRecord, AppError> {
        let record = self
            .store
            .get(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))?;

        if !record.is_live(Utc::now()) {
            return Err(AppError::not_found("Short link not found"));
        }

        Ok(record)
    }

    /// Rewrites an alias's target URL and expiry window.
    ///
    /// The new expiry counts from the update time, not the original
    /// creation time, so updating an expired record revives it. `code`
    /// and `created_at` never change.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for a malformed URL or non-positive expiry
    /// - [`AppError::NotFound`] if the code is physically absent
    pub async fn update(
        &self,
        code: &str,
        url: String,
        expiry_hours: i64,
    ) -> Result<LinkRecord, AppError> {
        let target_url = normalize_url(&url)
            .map_err(|e| AppError::bad_request(format!("Invalid URL: {e}")))?;
        let expires_in = validate_expiry(expiry_hours)?;

        let update = LinkUpdate {
            target_url,
            expires_at: Utc::now() + expires_in,
        };

        self.store
            .update(code, update)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))
    }

    /// Deletes an alias and its tags.
    ///
    /// The caller cannot distinguish "never existed" from "already gone";
    /// both report [`AppError::NotFound`].
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        if !self.store.delete(code).await? {
            return Err(AppError::not_found("Short link not found"));
        }

        // Tags are garbage once the record is gone; drop them eagerly.
        self.tags.remove_all(code).await?;
        Ok(())
    }

    /// Adds a tag to an alias and returns the updated tag set.
    ///
    /// The tag is trimmed first; duplicates are a no-op. The record must
    /// be physically present, but an expired one may still be tagged
    /// (it can be revived via [`Self::update`]).
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the trimmed tag is empty
    /// - [`AppError::NotFound`] if the code is absent
    pub async fn add_tag(&self, code: &str, tag: &str) -> Result<Vec<String>, AppError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(AppError::bad_request("Tag must not be empty"));
        }

        if self.store.get(code).await?.is_none() {
            return Err(AppError::not_found("Short link not found"));
        }

        self.tags.add_tag(code, tag).await?;
        self.tags.tags_for(code).await
    }

    /// Constructs the full short URL from the public base URL and a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}

fn validate_expiry(expiry_hours: i64) -> Result<Duration, AppError> {
    if expiry_hours < 1 {
        return Err(AppError::bad_request("Expiry must be at least 1 hour"));
    }

    // Duration::try_hours bounds the value; i64::MAX hours would overflow.
    Duration::try_hours(expiry_hours)
        .filter(|_| expiry_hours <= MAX_EXPIRY_HOURS)
        .ok_or_else(|| {
            AppError::bad_request(format!(
                "Expiry must be at most {MAX_EXPIRY_HOURS} hours"
            ))
        })
}
