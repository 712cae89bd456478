use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Key of the registered players collection
pub const PLAYERS_KEY: &str = "players";
/// Key of the registered draws collection
pub const DRAWS_KEY: &str = "currentDraws";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failed: {0}")]
    Backend(String),
    #[error("collection {key} is not a valid list: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize collection {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value storage for whole named collections, each kept as one JSON
/// document. Every save replaces the previous value for the key.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Read a collection. A key that was never written is an empty list.
pub async fn load_collection<S, T>(store: &S, key: &str) -> Result<Vec<T>, StoreError>
where
    S: RecordStore + ?Sized,
    T: DeserializeOwned,
{
    match store.load(key).await? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

/// Overwrite a collection with `records`
pub async fn save_collection<S, T>(store: &S, key: &str, records: &[T]) -> Result<(), StoreError>
where
    S: RecordStore + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(records).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.save(key, &raw).await
}

/// Process-local store, used in tests and as a throwaway backend
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
