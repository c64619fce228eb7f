// File: src/config.rs
// Purpose: Configuration parsing from enrol.toml

use anyhow::{Context, Result};
use rusty_enrol_validation::Rules;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EnrolConfig {
    #[serde(default)]
    pub rules: Rules,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Presentation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    /// Locale of helper and error texts (default: "en")
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Optional TOML file whose entries override the built-in texts
    #[serde(default)]
    pub messages: Option<PathBuf>,
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            messages: None,
        }
    }
}

impl EnrolConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: EnrolConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config
            .rules
            .check()
            .with_context(|| format!("Invalid rules in config file: {:?}", path))?;

        tracing::debug!(?path, "loaded configuration");
        Ok(config)
    }

    /// Like [`EnrolConfig::load`], but a missing file yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load configuration from default path (./enrol.toml)
    pub fn load_default() -> Result<Self> {
        Self::load_or_default("enrol.toml")
    }
}
