//! Numcore Configuration
//!
//! Handles parsing and management of numcore.toml configuration files.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::Level;

/// File name searched for by [`NumcoreConfig::find_and_load`].
pub const CONFIG_FILE_NAME: &str = "numcore.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching numcore.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NumcoreConfig {
    /// Entropy source selection
    #[serde(default)]
    pub random: RandomConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// CLI output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl NumcoreConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: NumcoreConfig = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the current directory or parents.
    pub fn load_from_cwd() -> ConfigResult<Self> {
        let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
        Self::find_and_load(&cwd)
    }

    /// Find and load configuration by searching up from the given directory.
    ///
    /// Falls back to defaults when no numcore.toml exists up to the root.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::load(&config_path);
            }
            if !dir.pop() {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(Self::default());
            }
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The configured log level as a tracing level.
    pub fn log_level(&self) -> ConfigResult<Level> {
        self.logging.level.parse::<Level>().map_err(|_| {
            ConfigError::InvalidLogLevel(self.logging.level.clone())
        })
    }
}

/// Which entropy source backs the random functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntropyKind {
    /// Operating system CSPRNG
    #[default]
    System,
    /// Deterministic ChaCha20 stream from `seed`
    Seeded,
}

/// Random source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RandomConfig {
    /// Entropy source
    #[serde(default)]
    pub source: EntropyKind,

    /// Seed for the seeded source (ignored by the system source)
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// CLI output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Digits after the decimal point for float results
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Text or JSON
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_precision() -> usize {
    6
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            format: OutputFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NumcoreConfig::default();
        assert_eq!(config.random.source, EntropyKind::System);
        assert_eq!(config.random.seed, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.output.precision, 6);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
[random]
source = "seeded"
seed = 42

[logging]
level = "debug"

[output]
precision = 3
format = "json"
"#;
        let config: NumcoreConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.random.source, EntropyKind::Seeded);
        assert_eq!(config.random.seed, Some(42));
        assert_eq!(config.log_level().unwrap(), Level::DEBUG);
        assert_eq!(config.output.precision, 3);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: NumcoreConfig = toml::from_str("[output]\nprecision = 2\n").unwrap();
        assert_eq!(config.output.precision, 2);
        assert_eq!(config.random.source, EntropyKind::System);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = NumcoreConfig::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(
            config.log_level(),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("numcore_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);

        let mut config = NumcoreConfig::default();
        config.random.source = EntropyKind::Seeded;
        config.random.seed = Some(7);
        config.save(&path).unwrap();

        let loaded = NumcoreConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        let found = NumcoreConfig::find_and_load(&dir).unwrap();
        assert_eq!(found, config);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/nonexistent/numcore.toml");
        assert!(matches!(
            NumcoreConfig::load(path),
            Err(ConfigError::NotFound(_))
        ));
    }
}
