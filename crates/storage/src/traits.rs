//! Trait definitions for the persistent store adapter.

use async_trait::async_trait;

use crate::error::Result;

/// Storage slot holding the serialized book collection.
pub const BOOKS_KEY: &str = "books";

/// Storage slot holding the serialized character collection.
pub const CHARACTERS_KEY: &str = "characters";

/// Durable key-value byte storage, one slot per collection.
///
/// Implementations only move bytes around; encoding and the recovery policy
/// for malformed payloads live in the catalog.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the bytes stored under `key`.
    ///
    /// # Returns
    /// `Some(bytes)` if the slot has been written, `None` otherwise
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the bytes stored under `key`.
    ///
    /// The write is durable once this returns.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value).await
    }
}
