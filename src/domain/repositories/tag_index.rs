//! Repository trait for the tag secondary index.

use crate::error::AppError;
use async_trait::async_trait;

/// Secondary mapping from short code to a set of tags.
///
/// Maintained independently of the primary record so tag writes never
/// contend with target/expiry updates. Existence checks are the service's
/// responsibility; the index itself accepts any code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagIndex: Send + Sync {
    /// Adds a tag to a code's set.
    ///
    /// Returns `true` if the tag was newly inserted, `false` if it was
    /// already present (duplicate adds are a no-op).
    async fn add_tag(&self, code: &str, tag: &str) -> Result<bool, AppError>;

    /// All tags for a code, sorted. Empty if none were ever added.
    async fn tags_for(&self, code: &str) -> Result<Vec<String>, AppError>;

    /// Drops every tag for a code. Called on link deletion and by the reaper.
    async fn remove_all(&self, code: &str) -> Result<(), AppError>;
}
