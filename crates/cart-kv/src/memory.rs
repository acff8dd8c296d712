//! In-memory Key-Value backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::{KeyValueStore, StorageResult};

/// In-memory backend (for development, testing and session-only carts).
///
/// Clones share the same map, so a test can keep a handle and inspect
/// what a store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.lock().insert(key.into(), value.into());
        store
    }

    /// Read a value without going through the async trait.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    /// Get all keys.
    pub fn keys(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// Clear all entries.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        self.lock().insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_unset_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("@cart").await.unwrap(), None);
        assert!(!store.exists("@cart").await.unwrap());
    }

    #[tokio::test]
    async fn test_set_replaces_value() {
        let store = MemoryStore::new();
        store.set("@cart", "[]".to_string()).await.unwrap();
        store.set("@cart", "[1]".to_string()).await.unwrap();

        assert_eq!(store.get("@cart").await.unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.keys(), vec!["@cart".to_string()]);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let observer = store.clone();

        store.set("k", "v".to_string()).await.unwrap();
        assert_eq!(observer.peek("k").as_deref(), Some("v"));

        observer.delete("k").await.unwrap();
        assert_eq!(store.peek("k"), None);
    }

    #[test]
    fn test_with_entry_and_clear() {
        let store = MemoryStore::with_entry("@cart", "[]");
        assert_eq!(store.peek("@cart").as_deref(), Some("[]"));

        store.clear();
        assert!(store.keys().is_empty());
    }
}
