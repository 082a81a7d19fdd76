//! Registry configuration, loaded from an optional TOML file.
//!
//! Every key is optional; a missing file section or key falls back to its
//! `Default`.
//!
//! ```toml
//! store_buffer_size = 64
//! log_format = "json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Environment variable naming the config file read by [`RegistryConfig::from_env`].
pub const CONFIG_ENV_VAR: &str = "NETREG_CONFIG";

const DEFAULT_STORE_BUFFER_SIZE: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Capacity of each store's request channel.
    pub store_buffer_size: usize,
    pub log_format: LogFormat,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            store_buffer_size: DEFAULT_STORE_BUFFER_SIZE,
            log_format: LogFormat::default(),
        }
    }
}

impl RegistryConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RegistryConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads the file named by `NETREG_CONFIG`, or the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Rejects values no registry can run with. Applied by every loader and
    /// again by `NetworkingRegistry::start`, since the fields are public.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_buffer_size == 0 {
            return Err(ConfigError::Invalid(
                "store_buffer_size must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.store_buffer_size, 32);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_parse() {
        let config =
            RegistryConfig::from_toml_str("store_buffer_size = 8\nlog_format = \"json\"\n").unwrap();
        assert_eq!(config.store_buffer_size, 8);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_zero_buffer() {
        let err = RegistryConfig::from_toml_str("store_buffer_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_unknown_keys_and_formats() {
        assert!(matches!(
            RegistryConfig::from_toml_str("buffer = 3"),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            RegistryConfig::from_toml_str("log_format = \"pretty\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "store_buffer_size = 4").unwrap();

        let config = RegistryConfig::load(file.path()).unwrap();
        assert_eq!(config.store_buffer_size, 4);

        let missing = RegistryConfig::load(Path::new("/nonexistent/netreg.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
