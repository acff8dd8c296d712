//! Key-Value store boundary with typed JSON helpers.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::StorageResult;

/// A device-local Key-Value store holding text blobs.
///
/// `set` replaces the whole value for a key; there are no partial updates.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Get the value stored under `key`, or `None` if the key is unset.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> StorageResult<()>;

    /// Remove the value stored under `key`. Removing an unset key is not an error.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check if a key is set.
    async fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        (**self).set(key, value).await
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        (**self).delete(key).await
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        (**self).exists(key).await
    }
}

/// Type-safe wrapper over a [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
///
/// # Example
///
/// ```rust,ignore
/// let cache = Cache::new(MemoryStore::new());
/// cache.set_json("@cart", &items).await?;
/// let items: Option<Vec<LineItem>> = cache.get_json("@cart").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value and decode it from JSON.
    ///
    /// Returns `None` if the key doesn't exist.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match self.store.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encode a value as JSON and store it.
    pub async fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, raw).await
    }

    /// Delete a value.
    pub async fn delete(&self, key: &str) -> StorageResult<()> {
        self.store.delete(key).await
    }

    /// Check if a key exists.
    pub async fn exists(&self, key: &str) -> StorageResult<bool> {
        self.store.exists(key).await
    }
}
