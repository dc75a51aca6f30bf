//! Configuration management for mediashelf
//!
//! Handles config file loading and where the store lives.
//! Config is stored at ~/.config/mediashelf/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::store::CatalogStore;
use crate::ui::CardStyle;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "MEDIASHELF_DATA_DIR";

/// File inside the data directory holding the key-value store
pub const STORE_FILE: &str = "storage.json";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where storage.json lives
    pub data_dir: Option<PathBuf>,
    /// Simulated fetch latency in milliseconds
    pub fetch_delay_ms: Option<u64>,
    /// Card layout for the grids
    pub card_style: Option<CardStyle>,
}

impl Config {
    /// Get config file path (~/.config/mediashelf/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mediashelf").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .map(|p| Self::load_from(&p))
            .unwrap_or_default()
    }

    /// Load config from an explicit path; unreadable or invalid files give defaults
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| match toml::from_str(&s) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Data directory with fallback chain:
    /// 1. Environment variable MEDIASHELF_DATA_DIR
    /// 2. `data_dir` from the config file
    /// 3. Platform local data dir + /mediashelf
    pub fn data_dir(&self) -> PathBuf {
        let env = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        self.resolve_data_dir(env)
    }

    fn resolve_data_dir(&self, env: Option<PathBuf>) -> PathBuf {
        env.filter(|p| !p.as_os_str().is_empty())
            .or_else(|| self.data_dir.clone())
            .or_else(|| dirs::data_local_dir().map(|p| p.join("mediashelf")))
            .unwrap_or_else(|| PathBuf::from(".mediashelf"))
    }

    /// Path of the persistent store file
    pub fn store_path(&self) -> PathBuf {
        self.data_dir().join(STORE_FILE)
    }

    /// Simulated fetch latency, 500ms unless configured
    pub fn fetch_delay(&self) -> Duration {
        self.fetch_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(CatalogStore::DEFAULT_LATENCY)
    }

    pub fn card_style(&self) -> CardStyle {
        self.card_style.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.data_dir.is_none());
        assert_eq!(config.fetch_delay(), Duration::from_millis(500));
        assert_eq!(config.card_style(), CardStyle::Card);
    }

    #[test]
    fn test_data_dir_precedence() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_data_dir(Some(PathBuf::from("/from/env"))),
            PathBuf::from("/from/env")
        );
        assert_eq!(config.resolve_data_dir(None), PathBuf::from("/from/config"));
        assert_eq!(
            config.resolve_data_dir(Some(PathBuf::new())),
            PathBuf::from("/from/config")
        );
    }

    #[test]
    fn test_written_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/shelf")),
            fetch_delay_ms: Some(0),
            card_style: Some(CardStyle::Compact),
        };

        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "fetch_delay_ms = \"soon\"").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
        assert_eq!(Config::load_from(&dir.path().join("missing.toml")), Config::default());
    }

    #[test]
    fn test_parse_card_style() {
        let config: Config = toml::from_str("card_style = \"compact\"\nfetch_delay_ms = 25").unwrap();
        assert_eq!(config.card_style(), CardStyle::Compact);
        assert_eq!(config.fetch_delay(), Duration::from_millis(25));
    }
}
