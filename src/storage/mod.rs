//! Persistence collaborator seam.
//!
//! The store treats durability as an external concern: anything that can
//! asynchronously get, set and remove string records by key can back it.
//! Two backends ship with the crate: [`MemoryStorage`] for tests and
//! ephemeral sessions, and [`JsonFileStorage`] for on-disk persistence.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;

use crate::core::Result;

/// Asynchronous key-value storage used to persist the preference snapshot.
///
/// The store only ever addresses a single fixed namespace key; backends
/// are free to map keys to files, tables or anything else. Failures cost
/// durability, never the correctness of the in-memory snapshot.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Fetches the record stored under `key`, if any.
    ///
    /// # Errors
    /// Returns a storage error if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous record.
    ///
    /// # Errors
    /// Returns a storage error if the backend rejects or fails the write.
    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Removes the record stored under `key`. Removing an absent record
    /// is not an error.
    ///
    /// # Errors
    /// Returns a storage error if the backend fails the removal.
    async fn remove(&self, key: &str) -> Result<()>;
}
