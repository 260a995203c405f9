//! Capped list of recent searches kept in a key-value storage

use super::storage::KeyValueStorage;
use crate::utils::StorageError;
use serde::{Deserialize, Serialize};

/// Prefix of every recent-searches storage key
pub const STORAGE_KEY_PREFIX: &str = "AUTOCOMPLETE_RECENT_SEARCHES";

/// One remembered search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearchItem {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl RecentSearchItem {
    /// Item for a plain query, identified by its own text
    pub fn from_query(query: &str) -> Self {
        Self {
            id: query.to_string(),
            label: query.to_string(),
            category: None,
        }
    }
}

/// Most-recent-first list of items stored as JSON under a namespaced key
#[derive(Debug)]
pub struct RecentSearchesStore<S> {
    storage: S,
    key: String,
    limit: usize,
}

impl<S: KeyValueStorage> RecentSearchesStore<S> {
    pub fn new(storage: S, key: &str, limit: usize) -> Self {
        Self {
            storage,
            key: format!("{STORAGE_KEY_PREFIX}:{key}"),
            limit,
        }
    }

    /// Full storage key, prefix included
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Stored items, most recent first. Unreadable data reads as empty.
    pub fn get_all(&self) -> Vec<RecentSearchItem> {
        match self.read() {
            Ok(items) => items,
            Err(e) => {
                log::warn!("Ignoring recent searches under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Put `item` first, dropping any older entry with the same id
    pub fn add_item(&mut self, item: RecentSearchItem) -> Result<(), StorageError> {
        let mut items = self.get_all();
        items.retain(|existing| existing.id != item.id);
        items.insert(0, item);
        items.truncate(self.limit);
        self.write(&items)
    }

    pub fn remove_item(&mut self, id: &str) -> Result<(), StorageError> {
        let mut items = self.get_all();
        items.retain(|existing| existing.id != id);
        self.write(&items)
    }

    /// Forget everything stored under this key
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove_item(&self.key)
    }

    fn read(&self) -> Result<Vec<RecentSearchItem>, StorageError> {
        match self.storage.get_item(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write(&mut self, items: &[RecentSearchItem]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        self.storage.set_item(&self.key, &raw)
    }
}
