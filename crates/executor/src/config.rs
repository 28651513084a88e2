//! Configuration via `stockroom.toml`
//!
//! Optional. When the file is absent every setting takes its default. Write a
//! commented default with `stockroom init-config`, edit it, and restart.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stockroom_core::{is_valid_timestamp_format, Limits, DEFAULT_TIMESTAMP_FORMAT};
use thiserror::Error;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "stockroom.toml";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("Failed to read config file '{}': {source}", path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// The file could not be written
    #[error("Failed to write config file '{}': {source}", path.display())]
    Write {
        /// Path that was written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A value parsed but is not acceptable
    #[error("Invalid configuration: {reason}")]
    Invalid {
        /// What is wrong
        reason: String,
    },
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Console text, as in the menu
    #[default]
    Human,
    /// One pretty-printed JSON document per result
    Json,
}

/// Settings loaded from `stockroom.toml`.
///
/// # Example
///
/// ```toml
/// timestamp_format = "%A, %B, %-d, %Y, %H:%M:%S"
/// output = "human"
///
/// [limits]
/// max_shelves = 1000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StockroomConfig {
    /// strftime pattern for insertion timestamps
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Output format: `"human"` (default) or `"json"`
    #[serde(default)]
    pub output: OutputFormat,
    /// Size limits applied to layouts and names
    #[serde(default)]
    pub limits: Limits,
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            output: OutputFormat::Human,
            limits: Limits::default(),
        }
    }
}

impl StockroomConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Stockroom configuration
#
# Insertion timestamps in the history view (strftime syntax).
timestamp_format = "%A, %B, %-d, %Y, %H:%M:%S"

# Output format: "human" (default) or "json"
output = "human"

# Size limits for the layout entered at set-up.
[limits]
max_shelves = 1000
max_slots_per_shelf = 10000
max_total_slots = 1000000
max_name_bytes = 256
"#
    }

    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_timestamp_format(&self.timestamp_format) {
            return Err(ConfigError::Invalid {
                reason: format!("timestamp_format '{}' is not a valid pattern", self.timestamp_format),
            });
        }
        let limits = &self.limits;
        if limits.max_shelves == 0
            || limits.max_slots_per_shelf == 0
            || limits.max_total_slots == 0
            || limits.max_name_bytes == 0
        {
            return Err(ConfigError::Invalid {
                reason: "limits must all be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: StockroomConfig =
            toml::from_str(content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `true` if the file was created.
    pub fn write_default_if_missing(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(true)
    }
}
