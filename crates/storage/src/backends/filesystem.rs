//! Filesystem-based storage backend implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::error::{CatalogError, Result};
use crate::traits::KeyValueStore;

/// Filesystem-based storage backend.
///
/// Every key is stored as a single JSON document next to the others:
/// ```text
/// storage_root/
/// +-- books.json
/// +-- characters.json
/// ```
///
/// Writes go to a sibling temporary file that is renamed over the target, so a
/// crash mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root_path: PathBuf,
}

impl FilesystemStore {
    /// Create a new filesystem storage backend.
    ///
    /// # Arguments
    /// * `root_path` - Path to the root storage directory
    pub fn new<P: AsRef<Path>>(root_path: P) -> Self {
        Self {
            root_path: root_path.as_ref().to_path_buf(),
        }
    }

    /// Create the storage directory if it doesn't exist yet.
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root_path)
            .await
            .map_err(|e| CatalogError::io("create storage directory", e))?;

        tracing::debug!("Storage directory ready at {}", self.root_path.display());
        Ok(())
    }

    fn get_key_file(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CatalogError::InvalidKey {
                key: key.to_string(),
            });
        }

        Ok(self.root_path.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FilesystemStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let key_file = self.get_key_file(key)?;

        match fs::read(&key_file).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CatalogError::io(format!("read {}", key_file.display()), e)),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let key_file = self.get_key_file(key)?;
        let temp_file = key_file.with_extension("json.tmp");

        fs::write(&temp_file, value)
            .await
            .map_err(|e| CatalogError::io(format!("write {}", temp_file.display()), e))?;

        fs::rename(&temp_file, &key_file)
            .await
            .map_err(|e| CatalogError::io(format!("replace {}", key_file.display()), e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_initialize_creates_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("library");
        let store = FilesystemStore::new(&root);

        store.initialize().await.unwrap();

        assert!(root.is_dir());
    }

    #[tokio::test]
    async fn test_missing_key_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(temp_dir.path());
        store.initialize().await.unwrap();

        assert!(store.get("books").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(temp_dir.path());
        store.initialize().await.unwrap();

        store.set("books", b"[1,2,3]").await.unwrap();
        store.set("books", b"[]").await.unwrap();

        assert_eq!(store.get("books").await.unwrap().as_deref(), Some(&b"[]"[..]));
        assert!(temp_dir.path().join("books.json").exists());
        assert!(!temp_dir.path().join("books.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(temp_dir.path());

        for key in ["", "../books", "a/b", "books.json"] {
            let result = store.set(key, b"[]").await;
            assert!(matches!(result, Err(CatalogError::InvalidKey { .. })), "{key}");
        }
    }
}
