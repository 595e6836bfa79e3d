//! Catalog storage for the Folio library.
//!
//! This crate owns the book and character collections: a [`Catalog`] keeps
//! them in memory, enforces cascade deletes, and writes every change through
//! to a [`KeyValueStore`] backend.

pub mod backends;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod models;
pub mod traits;
pub mod types;

// Re-export the main interface and types for easy access
pub use backends::{FilesystemStore, MemoryStore};
pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use traits::{BOOKS_KEY, CHARACTERS_KEY, KeyValueStore};
pub use types::{BookFilter, CatalogStats, CleanupReport, DeleteReport};
