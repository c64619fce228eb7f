//! Name validation (first, preferred and last name)

use thiserror::Error;

use crate::rules::{char_len, NameRules};

/// Reason a name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NameError {
    #[error("name is too short")]
    TooShort,
    #[error("name is too long")]
    TooLong,
    #[error("name may only contain letters A-Z")]
    InvalidChars,
}

/// The three name inputs on the form. They share one rule but carry their own
/// error texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    First,
    Preferred,
    Last,
}

impl NameField {
    fn key_stem(self) -> &'static str {
        match self {
            NameField::First => "firstName",
            NameField::Preferred => "preferredName",
            NameField::Last => "lastName",
        }
    }
}

impl NameError {
    /// Message id of the helper text shown for this error on `field`
    pub fn message_key(self, field: NameField) -> String {
        let suffix = match self {
            NameError::TooShort => "tooShort",
            NameError::TooLong => "tooLong",
            NameError::InvalidChars => "invalid",
        };
        format!("studentInfoForm_{}ErrorText_{}", field.key_stem(), suffix)
    }
}

/// Validates a name against the default rules
pub fn validate_name(value: &str) -> Result<(), NameError> {
    validate_name_with(value, &NameRules::default())
}

/// Validates a name: length first, then the character set
pub fn validate_name_with(value: &str, rules: &NameRules) -> Result<(), NameError> {
    let len = char_len(value);
    if len < rules.min_length {
        return Err(NameError::TooShort);
    }
    if len > rules.max_length {
        return Err(NameError::TooLong);
    }
    if !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(NameError::InvalidChars);
    }
    Ok(())
}

pub fn validate_first_name(value: &str) -> Result<(), NameError> {
    validate_name(value)
}

pub fn validate_preferred_name(value: &str) -> Result<(), NameError> {
    validate_name(value)
}

pub fn validate_last_name(value: &str) -> Result<(), NameError> {
    validate_name(value)
}
