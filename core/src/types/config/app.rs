use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// User-facing application configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProviderKeys,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Keys and knobs for the third-party collaborators. Keys ship empty and
/// are user-replaceable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProviderKeys {
    #[serde(default)]
    pub pexels_api_key: String,
    #[serde(default)]
    pub openweather_api_key: String,
    /// Maximum quote length requested from the quote service.
    #[serde(default = "default_quote_max_length")]
    pub quote_max_length: u32,
}

impl Default for ProviderKeys {
    fn default() -> Self {
        Self {
            pexels_api_key: String::new(),
            openweather_api_key: String::new(),
            quote_max_length: default_quote_max_length(),
        }
    }
}

fn default_quote_max_length() -> u32 {
    100
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
