//! Languages offered by the native / preferred language menus

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A language from the fixed, closed list on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Uk,
    Ru,
    De,
    En,
}

/// Order of the native language menu
pub const NATIVE_MENU: [Language; 4] = [Language::Uk, Language::Ru, Language::De, Language::En];

/// Order of the preferred language menu
pub const PREFERRED_MENU: [Language; 4] = [Language::En, Language::Uk, Language::Ru, Language::De];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("unknown language code '{0}' (expected one of: uk, ru, de, en)")]
    Unknown(String),
}

impl Language {
    /// Two-letter code
    pub fn code(self) -> &'static str {
        match self {
            Language::Uk => "uk",
            Language::Ru => "ru",
            Language::De => "de",
            Language::En => "en",
        }
    }

    /// Name of the language written in that language
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Uk => "Українська мова",
            Language::Ru => "Русский язык",
            Language::De => "Deutsche Sprache",
            Language::En => "English",
        }
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uk" => Ok(Language::Uk),
            "ru" => Ok(Language::Ru),
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            _ => Err(LanguageError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
