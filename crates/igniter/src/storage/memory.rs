use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::traits::check_key;
use super::{KeyValueStore, StorageResult};

/// In-memory key-value backend for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with raw values
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        check_key(key)?;
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get() {
        let storage = InMemoryStorage::new();
        assert_eq!(storage.get("k").await.unwrap(), None);

        storage.set("k", "[1]").await.unwrap();
        storage.set("k", "[2]").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("[2]"));
        assert!(storage.set("a/b", "[]").await.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let storage = InMemoryStorage::with_entries([("b", "x"), ("a", "y")]);
        let other = storage.clone();
        other.set("b", "z").await.unwrap();

        assert_eq!(storage.get("a").await.unwrap().as_deref(), Some("y"));
        assert_eq!(storage.get("b").await.unwrap().as_deref(), Some("z"));
    }
}
