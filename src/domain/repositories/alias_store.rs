//! Repository trait for short alias storage.

use crate::domain::entities::{LinkRecord, LinkUpdate};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Durable mapping from short code to link record.
///
/// The store is the single source of truth and the sole uniqueness
/// enforcement point. Operations on different codes must not serialize
/// each other; operations on the same code are serialized by the store so
/// no caller ever observes a partially written record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryAliasStore`] - DashMap-backed
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasStore: Send + Sync {
    /// Atomic check-and-insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already occupied,
    /// whether by a live record, an expired record, or a tombstone of a
    /// deleted one. Codes are never reused.
    async fn create_if_absent(&self, record: LinkRecord) -> Result<(), AppError>;

    /// Fetches the raw record, ignoring expiry.
    ///
    /// Expiry is a read-time policy applied by the service layer; the
    /// store hands back whatever is physically present.
    async fn get(&self, code: &str) -> Result<Option<LinkRecord>, AppError>;

    /// Atomically rewrites `target_url` and `expires_at` for one code.
    ///
    /// `code` and `created_at` are preserved. Returns `None` if the code
    /// is physically absent.
    async fn update(&self, code: &str, update: LinkUpdate)
    -> Result<Option<LinkRecord>, AppError>;

    /// Removes the record and tombstones its code.
    ///
    /// Returns `false` if the code was not present (idempotent).
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Codes of records whose expiry is at or before `cutoff`.
    ///
    /// Used by the background reaper only.
    async fn list_expired_before(&self, cutoff: DateTime<Utc>) -> Result<Vec<String>, AppError>;
}
