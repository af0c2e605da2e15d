use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::Result;

use super::StorageBackend;

/// In-memory storage backend.
///
/// Records live in a process-local map and vanish when the process exits.
/// Used by tests and by sessions that explicitly opt out of persistence.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-seeded with a single record.
    pub fn with_record(key: &str, value: &str) -> Self {
        let mut records = HashMap::new();
        records.insert(key.to_string(), value.to_string());
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.records.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.records.write().await.remove(key);
        Ok(())
    }
}
