//! Error types for the catalog storage system.

use thiserror::Error;

/// Errors that can occur during catalog operations.
///
/// Missing entities are not errors: lookups return `None` and updates or
/// deletes of unknown ids are no-ops.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid book data: {message}")]
    InvalidBookData { message: String },

    #[error("Invalid character data: {message}")]
    InvalidCharacterData { message: String },

    #[error("Invalid storage key: {key:?}")]
    InvalidKey { key: String },

    #[error("Failed to serialize {collection}")]
    Serialization {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage operation failed: {operation}")]
    StorageOperationFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        CatalogError::StorageOperationFailed {
            operation: operation.into(),
            source,
        }
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
