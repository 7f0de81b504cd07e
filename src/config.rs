//! Configuration for ordr.
//!
//! Loaded from ~/.config/ordr/ordr.yml or .ordr.yml

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Storage settings.
    pub storage: StorageConfig,

    /// Verbose output by default.
    pub debug: bool,
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .ordr.yml in current directory
    /// 3. ~/.config/ordr/ordr.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // Explicit path takes precedence
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project config
        let project_config = PathBuf::from(".ordr.yml");
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from .ordr.yml");
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load .ordr.yml: {}", e);
                }
            }
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("ordr").join("ordr.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", user_config.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // Use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Full path of the orders file.
    pub fn orders_path(&self) -> PathBuf {
        self.storage.data_dir.join(&self.storage.file_name)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.storage.file_name.trim().is_empty() {
            eyre::bail!("storage.file-name must not be empty");
        }
        Ok(())
    }
}

/// Storage settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the orders file.
    #[serde(rename = "data-dir")]
    pub data_dir: PathBuf,

    /// Name of the orders file inside the data directory.
    #[serde(rename = "file-name")]
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            file_name: "orders.csv".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
        assert_eq!(config.storage.file_name, "orders.csv");
        assert!(!config.debug);
    }

    #[test]
    fn test_orders_path_joins_dir_and_file() {
        let config = Config::default();
        assert_eq!(config.orders_path(), PathBuf::from("data").join("orders.csv"));
    }

    #[test]
    fn test_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        let config = Config {
            storage: StorageConfig {
                file_name: "".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
storage:
  data-dir: /var/lib/ordr
  file-name: orders.csv
debug: true
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/ordr"));
        assert!(config.debug);
    }

    #[test]
    fn test_parse_partial_yaml_fills_defaults() {
        let yaml = "debug: true\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.storage.file_name, "orders.csv");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let missing = PathBuf::from("/nonexistent/ordr.yml");
        assert!(Config::load(Some(&missing)).is_err());
    }
}
