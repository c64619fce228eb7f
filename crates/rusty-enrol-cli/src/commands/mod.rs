pub mod check;
pub mod rules;

use anyhow::Result;
use rusty_enrol::EnrolConfig;
use std::path::Path;

/// Explicit `--config` must exist; otherwise ./enrol.toml is optional
pub fn load_config(path: Option<&Path>) -> Result<EnrolConfig> {
    match path {
        Some(path) => EnrolConfig::load(path),
        None => EnrolConfig::load_default(),
    }
}
