//! # Configuration
//!
//! Application settings for the insert screens. Every section has defaults,
//! so an empty YAML document (or no file at all) yields a working config.
//!
//! ```yaml
//! messages:
//!   saved: "Data saved successfully"
//! validation:
//!   trim_whitespace: true
//! logging:
//!   filter: "gloycash=debug"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub messages: NotificationMessages,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load a YAML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml_content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml_str(&yaml_content)?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_yaml_str(yaml_content: &str) -> Result<Self, ConfigError> {
        if yaml_content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml_content)?)
    }
}

/// Texts shown in the one-shot notification after a submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationMessages {
    pub saved: String,
    pub failed: String,
    pub invalid: String,
}

impl NotificationMessages {
    /// Messages used by the Indonesian-language build of the app
    pub fn indonesian() -> Self {
        Self {
            saved: "Data berhasil disimpan".to_string(),
            failed: "Data gagal disimpan".to_string(),
            invalid: "Input tidak valid. Periksa kembali data anda".to_string(),
        }
    }
}

impl Default for NotificationMessages {
    fn default() -> Self {
        Self {
            saved: "Data saved successfully".to_string(),
            failed: "Data failed to save".to_string(),
            invalid: "Input invalid, review your data".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Treat whitespace-only input as empty. Off by default, so "  " passes.
    pub trim_whitespace: bool,
    /// Per-field error; `{field}` is replaced by the field label
    pub required_message: String,
}

impl ValidationConfig {
    pub fn required_message_for(&self, label: &str) -> String {
        self.required_message.replace("{field}", label)
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            trim_whitespace: false,
            required_message: "{field} must not be empty".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
