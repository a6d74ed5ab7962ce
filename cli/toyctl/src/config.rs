//! Configuration loading.
//!
//! An optional `config.json` in the platform config directory supplies
//! defaults. Command-line flags and `TOY_FORMAT` take precedence.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliError;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf, CliError> {
    ProjectDirs::from("dev", "toybox", "toy")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(CliError::ConfigDir)
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (`table` or `json`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Render UUIDs in uppercase. The codec itself always emits lowercase.
    #[serde(default)]
    pub uppercase_uuid: bool,
}

impl Config {
    /// Load config from the default location, or return defaults.
    pub fn load() -> Result<Self, CliError> {
        Self::load_from(&config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.format.is_none());
        assert!(!config.uppercase_uuid);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"format": "json", "uppercase_uuid": true}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert!(config.uppercase_uuid);
    }

    #[test]
    fn test_load_unreadable_path_fails() {
        let dir = tempdir().unwrap();

        // A directory exists but cannot be read as a file.
        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, CliError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{}").unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, CliError::ConfigParse { .. }));
        assert!(err.is_config_error());
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
