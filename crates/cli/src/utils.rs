//! Utility functions for CLI operations and common functionality.

use std::io::{self, Write};
use std::path::PathBuf;

use eyre::Result;
use folio_storage::{Catalog, FilesystemStore, KeyValueStore, MemoryStore};

use crate::config::Config;

/// The catalog as used by the front-end, over whichever backend was chosen.
pub type AppCatalog = Catalog<Box<dyn KeyValueStore>>;

/// Open the catalog from `data_dir`, the configured path, or memory.
pub async fn open_catalog(
    data_dir: Option<PathBuf>,
    ephemeral: bool,
    config: &Config,
) -> Result<AppCatalog> {
    let store: Box<dyn KeyValueStore> = if ephemeral {
        tracing::info!("Using in-memory catalog, changes will not be saved");
        Box::new(MemoryStore::new())
    } else {
        let path = data_dir.unwrap_or_else(|| PathBuf::from(&config.storage.path));
        let store = FilesystemStore::new(&path);
        store.initialize().await?;
        tracing::info!("Using catalog at {}", path.display());
        Box::new(store)
    };

    Ok(Catalog::load(store).await?)
}

/// Ask a yes/no question on stdin. Anything but an explicit yes is a no.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{} (y/N): ", question);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase().starts_with('y'))
}

/// Whether a destructive action may go ahead.
pub fn confirm_delete(question: &str, force: bool, config: &Config) -> Result<bool> {
    if force || !config.library.confirm_deletes {
        return Ok(true);
    }
    confirm(question)
}
