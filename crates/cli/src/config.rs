use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::Result;
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LibraryConfig {
    /// Ask before deleting books and characters
    pub confirm_deletes: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_notes: bool,
    pub show_images: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: get_default_data_dir()
                .join("library")
                .to_string_lossy()
                .to_string(),
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            confirm_deletes: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_notes: true,
            show_images: false,
        }
    }
}

impl Config {
    pub fn get_config_path() -> PathBuf {
        get_default_config_dir().join("config.json")
    }

    pub async fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()).await
    }

    /// Read the configuration at `config_path`, writing the defaults there
    /// first if the file doesn't exist.
    pub async fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(config_path).await?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(config_path).await?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub async fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()).await
    }

    pub async fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content).await?;
        Ok(())
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["storage", "path"] => {
                self.storage.path = value.to_string();
            }
            ["library", "confirm_deletes"] => {
                self.library.confirm_deletes = parse_bool(value)?;
            }
            ["display", "show_notes"] => {
                self.display.show_notes = parse_bool(value)?;
            }
            ["display", "show_images"] => {
                self.display.show_images = parse_bool(value)?;
            }
            _ => {
                return Err(eyre::eyre!("Unknown configuration key: {}", key));
            }
        }

        Ok(())
    }

    pub fn get_value(&self, key: &str) -> Result<String> {
        let parts: Vec<&str> = key.split('.').collect();

        let value = match parts.as_slice() {
            ["storage", "path"] => self.storage.path.clone(),
            ["library", "confirm_deletes"] => self.library.confirm_deletes.to_string(),
            ["display", "show_notes"] => self.display.show_notes.to_string(),
            ["display", "show_images"] => self.display.show_images.to_string(),
            _ => {
                return Err(eyre::eyre!("Unknown configuration key: {}", key));
            }
        };

        Ok(value)
    }

    pub fn show_all(&self) -> String {
        format!(
            "Configuration:\n\
             Storage:\n\
             └─ path: {}\n\
             Library:\n\
             └─ confirm_deletes: {}\n\
             Display:\n\
             ├─ show_notes: {}\n\
             └─ show_images: {}",
            self.storage.path,
            self.library.confirm_deletes,
            self.display.show_notes,
            self.display.show_images,
        )
    }

    pub async fn reset() -> Result<Self> {
        let config = Self::default();
        config.save().await?;
        Ok(config)
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    value
        .parse::<bool>()
        .map_err(|_| eyre::eyre!("Invalid boolean value: {}", value))
}

/// Get the default configuration directory
fn get_default_config_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "folio", "folio") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        // Fallback to current directory if we can't determine project dirs
        PathBuf::from(".folio").join("config")
    }
}

/// Get the default data directory
fn get_default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "folio", "folio") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        PathBuf::from(".folio").join("data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_and_get_known_keys() {
        let mut config = Config::default();

        config.set_value("library.confirm_deletes", "false").unwrap();
        config.set_value("storage.path", "/tmp/folio").unwrap();

        assert_eq!(config.get_value("library.confirm_deletes").unwrap(), "false");
        assert_eq!(config.get_value("storage.path").unwrap(), "/tmp/folio");
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        let mut config = Config::default();

        assert!(config.set_value("storage.backend", "s3").is_err());
        assert!(config.set_value("display.show_notes", "maybe").is_err());
        assert!(config.get_value("display").is_err());
    }

    #[tokio::test]
    async fn load_creates_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = Config::load_from(&path).await.unwrap();

        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        let mut config = Config::default();
        config.display.show_images = true;

        config.save_to(&path).await.unwrap();

        assert_eq!(Config::load_from(&path).await.unwrap(), config);
    }

    #[tokio::test]
    async fn missing_sections_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"storage": {"path": "/data/folio"}}"#).unwrap();

        let config = Config::load_from(&path).await.unwrap();

        assert_eq!(config.storage.path, "/data/folio");
        assert!(config.library.confirm_deletes);
    }

    #[tokio::test]
    async fn missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"library": {}, "display": {"show_images": true}}"#,
        )
        .unwrap();

        let config = Config::load_from(&path).await.unwrap();

        assert!(config.library.confirm_deletes);
        assert!(config.display.show_notes);
        assert!(config.display.show_images);
        assert_eq!(config.storage, StorageConfig::default());
    }
}
