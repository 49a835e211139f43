//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{
    APP_DIR_NAME, CONFIG_DIR_ENV, DEFAULT_PAGE_SIZE, SEARCH_DEBOUNCE_MS, TRENDING_LIMIT,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Where user preferences (likes, saves, theme) are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file backing the preference store
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    StorageConfig::default_data_file().unwrap_or_else(|_| PathBuf::from("storage.json"))
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl StorageConfig {
    /// Gets the default preference file path.
    ///
    /// When the config directory is overridden through the environment, the
    /// data file lives next to the config file so the override isolates both.
    ///
    /// - Linux: `~/.local/share/DevShelf/storage.json`
    /// - macOS: `~/Library/Application Support/DevShelf/storage.json`
    /// - Windows: `%APPDATA%\DevShelf\storage.json`
    fn default_data_file() -> Result<PathBuf> {
        if std::env::var_os(CONFIG_DIR_ENV).is_some() {
            return Ok(Config::config_dir()?.join("storage.json"));
        }

        let data_dir = dirs::data_dir()
            .context("Failed to determine data directory")?
            .join(APP_DIR_NAME);

        Ok(data_dir.join("storage.json"))
    }
}

/// Browse listing preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Tools per listing page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Number of tools in the likes-only trending list
    #[serde(default = "default_trending_limit")]
    pub trending_limit: usize,
    /// Quiet period before search input is applied, in milliseconds
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_trending_limit() -> usize {
    TRENDING_LIMIT
}

fn default_search_debounce_ms() -> u64 {
    SEARCH_DEBOUNCE_MS
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            trending_limit: default_trending_limit(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl BrowseConfig {
    /// Search debounce period as a [`Duration`].
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Catalog behaviour switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Keep submitted tools across runs (off by default: submissions last one session)
    #[serde(default)]
    pub persist_submissions: bool,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/DevShelf/config.toml`
/// - macOS: `~/Library/Application Support/DevShelf/config.toml`
/// - Windows: `%APPDATA%\DevShelf\config.toml`
///
/// `DEVSHELF_CONFIG_DIR` overrides the directory.
///
/// # Validation
///
/// - `page_size` must be at least 1
/// - `trending_limit` must be at least 1
/// - `data_file` must not be an existing directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Preference storage location
    #[serde(default)]
    pub storage: StorageConfig,
    /// Browse listing settings
    #[serde(default)]
    pub browse: BrowseConfig,
    /// Catalog behaviour
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path, honouring `DEVSHELF_CONFIG_DIR`.
    ///
    /// - Linux: `~/.config/DevShelf/`
    /// - macOS: `~/Library/Application Support/DevShelf/`
    /// - Windows: `%APPDATA%\DevShelf\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.browse.page_size == 0 {
            anyhow::bail!("browse.page_size must be at least 1");
        }

        if self.browse.trending_limit == 0 {
            anyhow::bail!("browse.trending_limit must be at least 1");
        }

        if self.storage.data_file.is_dir() {
            anyhow::bail!(
                "storage.data_file points to a directory: {}",
                self.storage.data_file.display()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.browse.page_size, 6);
        assert_eq!(config.browse.trending_limit, 6);
        assert_eq!(config.browse.search_debounce(), Duration::from_millis(300));
        assert!(!config.catalog.persist_submissions);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_page_size() {
        let mut config = Config::new();
        config.browse.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_trending_limit() {
        let mut config = Config::new();
        config.browse.trending_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_data_file_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.storage.data_file = temp_dir.path().to_path_buf();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let config = Config::from_toml("[browse]\npage_size = 4\n").unwrap();
        assert_eq!(config.browse.page_size, 4);
        assert_eq!(config.browse.trending_limit, 6);
        assert!(!config.catalog.persist_submissions);
    }

    #[test]
    fn test_config_storage_section_without_data_file() {
        let config = Config::from_toml("[storage]\n\n[browse]\npage_size = 2\n").unwrap();
        assert_eq!(config.storage, StorageConfig::default());
        assert!(config.storage.data_file.ends_with("storage.json"));
        assert_eq!(config.browse.page_size, 2);
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        assert!(Config::from_toml("[browse]\npage_size = 0\n").is_err());
        assert!(Config::from_toml("[browse]\npage_size = \"six\"\n").is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.catalog.persist_submissions = true;
        config.storage.data_file = temp_dir.path().join("prefs.json");

        // Manually save to temp location for testing
        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded = Config::from_toml(&content).unwrap();

        assert_eq!(loaded, config);
    }
}
