// File: src/messages.rs
// Purpose: Localized form texts looked up by message id

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::UiConfig;

const EN: &str = include_str!("../locales/en.toml");
const DE: &str = include_str!("../locales/de.toml");

/// Locale every lookup falls back to
pub const FALLBACK_LOCALE: &str = "en";

/// Message catalog for one UI locale
///
/// Lookups try the active locale, then English, then return the key itself so
/// a missing text is visible instead of blank.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Catalog {
    /// Load the built-in catalog for `locale`
    pub fn load(locale: &str) -> Result<Self> {
        let fallback = parse_messages(EN).context("Failed to parse built-in English messages")?;

        let messages = match builtin(locale) {
            Some(content) => parse_messages(content)
                .with_context(|| format!("Failed to parse built-in messages for '{}'", locale))?,
            None => {
                tracing::warn!(locale, "no built-in messages for locale, using English");
                HashMap::new()
            }
        };

        Ok(Self {
            locale: locale.to_string(),
            messages,
            fallback,
        })
    }

    pub fn english() -> Result<Self> {
        Self::load(FALLBACK_LOCALE)
    }

    /// Build the catalog described by the `[ui]` config section
    pub fn from_config(ui: &UiConfig) -> Result<Self> {
        let mut catalog = Self::load(&ui.locale)?;
        if let Some(path) = &ui.messages {
            catalog.merge_file(path)?;
        }
        Ok(catalog)
    }

    /// Override entries with the `key = "text"` pairs of a TOML document
    pub fn merge_toml(&mut self, content: &str) -> Result<()> {
        let overrides = parse_messages(content)?;
        self.messages.extend(overrides);
        Ok(())
    }

    pub fn merge_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read messages file: {:?}", path))?;
        self.merge_toml(&content)
            .with_context(|| format!("Failed to parse messages file: {:?}", path))
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key) || self.fallback.contains_key(key)
    }

    pub fn translate(&self, key: &str) -> String {
        if let Some(text) = self.messages.get(key).or_else(|| self.fallback.get(key)) {
            return text.clone();
        }

        tracing::warn!(key, locale = %self.locale, "missing message");
        key.to_string()
    }

    /// Translate and replace `{name}` placeholders with the given values
    pub fn format_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.translate(key), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
    }
}

fn builtin(locale: &str) -> Option<&'static str> {
    match locale {
        "en" => Some(EN),
        "de" => Some(DE),
        _ => None,
    }
}

fn parse_messages(content: &str) -> Result<HashMap<String, String>> {
    let messages: HashMap<String, String> = toml::from_str(content)?;
    Ok(messages)
}
