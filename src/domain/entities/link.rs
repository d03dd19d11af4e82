//! Link entity representing a short alias mapping.

use chrono::{DateTime, Utc};

/// A short alias mapped to a target URL, with lifecycle timestamps.
///
/// `code` and `created_at` are immutable once the record exists; updates
/// may only rewrite `target_url` and `expires_at`. Tags are kept in a
/// secondary index, not on the record, so tag mutations never contend
/// with target/expiry updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Creates a new record. `expires_at` must be after `created_at`.
    pub fn new(
        code: String,
        target_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        debug_assert!(expires_at > created_at);
        Self {
            code,
            target_url,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the record has not yet passed its expiry time.
    ///
    /// Pure predicate: callers supply `now` so expiry can be evaluated
    /// against any reference instant.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Replacement values for an existing link.
///
/// The store applies both fields atomically per code; `code` and
/// `created_at` are never touched.
#[derive(Debug, Clone)]
pub struct LinkUpdate {
    pub target_url: String,
    pub expires_at: DateTime<Utc>,
}
