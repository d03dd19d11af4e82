//! In-memory tag index backed by DashMap.

use crate::domain::repositories::TagIndex;
use crate::error::AppError;
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashSet;

/// In-memory implementation of [`TagIndex`].
///
/// One entry per code holding a set of tags; duplicates collapse in the
/// set. Tag writes touch only this map, never the primary record.
#[derive(Debug, Default)]
pub struct MemoryTagIndex {
    tags: DashMap<String, HashSet<String>>,
}

impl MemoryTagIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TagIndex for MemoryTagIndex {
    async fn add_tag(&self, code: &str, tag: &str) -> Result<bool, AppError> {
        let mut entry = self.tags.entry(code.to_owned()).or_default();
        Ok(entry.insert(tag.to_owned()))
    }

    async fn tags_for(&self, code: &str) -> Result<Vec<String>, AppError> {
        let mut tags: Vec<String> = self
            .tags
            .get(code)
            .map(|entry| entry.iter().cloned().collect())
            .unwrap_or_default();
        tags.sort();
        Ok(tags)
    }

    async fn remove_all(&self, code: &str) -> Result<(), AppError> {
        self.tags.remove(code);
        Ok(())
    }
}
