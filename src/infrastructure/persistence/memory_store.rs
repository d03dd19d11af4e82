//! In-memory alias store backed by DashMap.

use crate::domain::entities::{LinkRecord, LinkUpdate};
use crate::domain::repositories::AliasStore;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// In-memory implementation of [`AliasStore`] using DashMap.
///
/// DashMap shards its locks, so operations on unrelated codes never
/// serialize each other while same-code operations stay atomic.
///
/// Deleted codes are tombstoned in a separate set: a code handed out once
/// is never handed out again, even after its record is reaped, so a
/// visitor holding a stale short URL can never land on someone else's
/// link.
#[derive(Debug, Default)]
pub struct MemoryAliasStore {
    records: DashMap<String, LinkRecord>,
    retired: DashMap<String, ()>,
}

impl MemoryAliasStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AliasStore for MemoryAliasStore {
    async fn create_if_absent(&self, record: LinkRecord) -> Result<(), AppError> {
        match self.records.entry(record.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Short code '{}' is already taken",
                record.code
            ))),
            Entry::Vacant(slot) => {
                // Checked under the entry lock: `delete` tombstones while
                // holding this same lock, so a vacant slot with no tombstone
                // means the code was truly never handed out.
                if self.retired.contains_key(&record.code) {
                    return Err(AppError::conflict(format!(
                        "Short code '{}' is already taken",
                        record.code
                    )));
                }

                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn get(&self, code: &str) -> Result<Option<LinkRecord>, AppError> {
        Ok(self.records.get(code).map(|entry| entry.clone()))
    }

    async fn update(
        &self,
        code: &str,
        update: LinkUpdate,
    ) -> Result<Option<LinkRecord>, AppError> {
        // get_mut holds the shard lock for the duration of the rewrite, so
        // concurrent updates to the same code serialize here.
        let Some(mut entry) = self.records.get_mut(code) else {
            return Ok(None);
        };

        entry.target_url = update.target_url;
        entry.expires_at = update.expires_at;

        Ok(Some(entry.clone()))
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        match self.records.entry(code.to_owned()) {
            Entry::Occupied(entry) => {
                // Tombstone before removal, still under the entry lock, so
                // no create ever observes the code vacant and unretired.
                self.retired.insert(code.to_owned(), ());
                entry.remove();
                Ok(true)
            }
            Entry::Vacant(_) => Ok(false),
        }
    }

    async fn list_expired_before(&self, cutoff: DateTime<Utc>) -> Result<Vec<String>, AppError> {
        Ok(self
            .records
            .iter()
            .filter(|entry| entry.expires_at <= cutoff)
            .map(|entry| entry.key().clone())
            .collect())
    }
}
