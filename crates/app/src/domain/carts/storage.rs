//! Durable key-value slots for client state.

use std::{io, path::PathBuf};

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tokio::{fs, sync::Mutex};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("storage i/o failed")]
    Io(#[from] io::Error),
}

/// String slots addressed by key.
#[automock]
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read a slot; `None` when it has never been written or was cleared.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Remove a slot.
    async fn clear(&self, key: &str) -> Result<(), StorageError>;
}

/// One file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path(key)?;

        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let path = self.path(key)?;
        let staged = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir).await?;
        fs::write(&staged, value).await?;
        fs::rename(&staged, &path).await?;

        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path(key)?;

        match fs::remove_file(&path).await {
            Err(error) if error.kind() != io::ErrorKind::NotFound => Err(error.into()),
            _ => Ok(()),
        }
    }
}

/// Process-local slots, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<FxHashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.slots.lock().await.insert(key.to_string(), value);

        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<(), StorageError> {
        self.slots.lock().await.remove(key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn file_storage_round_trips_a_slot() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path().join("state"));

        assert_eq!(storage.get("cart").await?, None);

        storage.set("cart", "[1,2]".to_string()).await?;

        assert_eq!(storage.get("cart").await?.as_deref(), Some("[1,2]"));

        storage.set("cart", "[]".to_string()).await?;

        assert_eq!(storage.get("cart").await?.as_deref(), Some("[]"));

        Ok(())
    }

    #[tokio::test]
    async fn file_storage_clear_is_idempotent() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path());

        storage.set("cart", "[]".to_string()).await?;
        storage.clear("cart").await?;
        storage.clear("cart").await?;

        assert_eq!(storage.get("cart").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn file_storage_rejects_path_like_keys() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path());

        let result = storage.set("../escape", String::new()).await;

        assert!(
            matches!(result, Err(StorageError::InvalidKey(_))),
            "expected InvalidKey, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn memory_storage_slots_are_independent() -> TestResult {
        let storage = MemoryStorage::new();

        storage.set("a", "1".to_string()).await?;
        storage.set("b", "2".to_string()).await?;
        storage.clear("a").await?;

        assert_eq!(storage.get("a").await?, None);
        assert_eq!(storage.get("b").await?.as_deref(), Some("2"));

        Ok(())
    }
}
