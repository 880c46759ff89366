use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "BOBITA_CONFIG";

/// Config file looked up in the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "bobita.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path} - {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Store settings read from a JSON file.
///
/// Every field is optional in the file; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Recipient prefilled on the cart screen
    pub default_phone: String,
    pub processing_delay_ms: u64,
    pub splash_delay_ms: u64,
    /// Where log output goes while the terminal UI is running
    pub log_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_phone: "07xxxxxxxx".to_string(),
            processing_delay_ms: 2200,
            splash_delay_ms: 2200,
            log_file: PathBuf::from("bobita.log"),
        }
    }
}

impl StoreConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    /// Loads the config from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the config from `$BOBITA_CONFIG` or `bobita.json`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.processing_delay(), Duration::from_millis(2200));
        assert_eq!(config.default_phone, "07xxxxxxxx");
    }

    #[test]
    fn test_partial_file_overrides_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_phone": "0744123456", "processing_delay_ms": 10}}"#).unwrap();

        let config = StoreConfig::load_from(file.path()).unwrap();
        assert_eq!(config.default_phone, "0744123456");
        assert_eq!(config.processing_delay(), Duration::from_millis(10));
        assert_eq!(config.splash_delay_ms, 2200);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = StoreConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("Invalid config file"));
    }
}
