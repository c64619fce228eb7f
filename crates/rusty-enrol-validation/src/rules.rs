//! Rule parameters shared by the validators

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Special characters a password has to contain at least one of
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*";

/// Complete rule set for the registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Rules {
    #[serde(default)]
    pub name: NameRules,

    #[serde(default)]
    pub password: PasswordRules,
}

/// Length limits for first, preferred and last names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRules {
    #[serde(default = "default_name_min")]
    pub min_length: usize,

    #[serde(default = "default_name_max")]
    pub max_length: usize,
}

/// Length limits and the special character set for passwords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRules {
    #[serde(default = "default_password_min")]
    pub min_length: usize,

    #[serde(default = "default_password_max")]
    pub max_length: usize,

    #[serde(default = "default_special_chars")]
    pub special_chars: String,
}

fn default_name_min() -> usize {
    2
}

fn default_name_max() -> usize {
    30
}

fn default_password_min() -> usize {
    8
}

fn default_password_max() -> usize {
    16
}

fn default_special_chars() -> String {
    DEFAULT_SPECIAL_CHARS.to_string()
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            min_length: default_name_min(),
            max_length: default_name_max(),
        }
    }
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            min_length: default_password_min(),
            max_length: default_password_max(),
            special_chars: default_special_chars(),
        }
    }
}

/// Why a rule set cannot be used
///
/// Rules may only tighten the defaults: the validated types always apply the
/// default rules, so anything a looser rule lets through could never be
/// registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("{rule}: min_length {min} is greater than max_length {max}")]
    EmptyRange {
        rule: &'static str,
        min: usize,
        max: usize,
    },
    #[error("{rule}: {setting} = {value} is looser than the default {default}")]
    LooserThanDefault {
        rule: &'static str,
        setting: &'static str,
        value: usize,
        default: usize,
    },
    #[error("password: special_chars must not be empty")]
    NoSpecialChars,
    #[error("password: special character '{0}' is not one of {}", DEFAULT_SPECIAL_CHARS)]
    UnknownSpecialChar(char),
}

impl Rules {
    /// Checks that every rule can be satisfied and none is looser than the
    /// defaults
    pub fn check(&self) -> Result<(), RulesError> {
        let defaults = Rules::default();
        check_lengths(
            "name",
            self.name.min_length,
            self.name.max_length,
            defaults.name.min_length,
            defaults.name.max_length,
        )?;
        check_lengths(
            "password",
            self.password.min_length,
            self.password.max_length,
            defaults.password.min_length,
            defaults.password.max_length,
        )?;

        if self.password.special_chars.is_empty() {
            return Err(RulesError::NoSpecialChars);
        }
        if let Some(c) = self
            .password
            .special_chars
            .chars()
            .find(|c| !DEFAULT_SPECIAL_CHARS.contains(*c))
        {
            return Err(RulesError::UnknownSpecialChar(c));
        }
        Ok(())
    }
}

fn check_lengths(
    rule: &'static str,
    min: usize,
    max: usize,
    default_min: usize,
    default_max: usize,
) -> Result<(), RulesError> {
    if min > max {
        return Err(RulesError::EmptyRange { rule, min, max });
    }
    if min < default_min {
        return Err(RulesError::LooserThanDefault {
            rule,
            setting: "min_length",
            value: min,
            default: default_min,
        });
    }
    if max > default_max {
        return Err(RulesError::LooserThanDefault {
            rule,
            setting: "max_length",
            value: max,
            default: default_max,
        });
    }
    Ok(())
}

/// Number of characters in `value`, counted as Unicode scalar values
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}
