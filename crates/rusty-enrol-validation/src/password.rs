//! Password validation functions

use thiserror::Error;

use crate::rules::{char_len, PasswordRules};

/// Reason a password was rejected, in the order the rules are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Error)]
pub enum PasswordError {
    #[error("password is too short")]
    TooShort,
    #[error("password is too long")]
    TooLong,
    #[error("password must contain at least one lowercase letter")]
    MissingLowercase,
    #[error("password must contain at least one uppercase letter")]
    MissingUppercase,
    #[error("password must contain at least one digit")]
    MissingDigit,
    #[error("password must contain at least one special character")]
    MissingSpecialChar,
}

impl PasswordError {
    pub fn message_key(self) -> &'static str {
        match self {
            PasswordError::TooShort => "studentInfoForm_passwordErrorText_lengthTooShort",
            PasswordError::TooLong => "studentInfoForm_passwordErrorText_lengthTooLong",
            PasswordError::MissingLowercase => "studentInfoForm_passwordErrorText_lowercase",
            PasswordError::MissingUppercase => "studentInfoForm_passwordErrorText_uppercase",
            PasswordError::MissingDigit => "studentInfoForm_passwordErrorText_number",
            PasswordError::MissingSpecialChar => {
                "studentInfoForm_passwordErrorText_specialCharacter"
            }
        }
    }
}

/// Validates a password against the default rules
///
/// # Examples
/// ```
/// use rusty_enrol_validation::password::{validate_password, PasswordError};
/// assert_eq!(validate_password("Abc123!@"), Ok(()));
/// assert_eq!(validate_password("abc123!@"), Err(PasswordError::MissingUppercase));
/// ```
pub fn validate_password(value: &str) -> Result<(), PasswordError> {
    validate_password_with(value, &PasswordRules::default())
}

/// Validates a password; the first failing rule wins
pub fn validate_password_with(value: &str, rules: &PasswordRules) -> Result<(), PasswordError> {
    password_failures(value, rules)
        .into_iter()
        .next()
        .map_or(Ok(()), Err)
}

/// Every rule the password breaks, in check order
///
/// Useful for showing a full checklist instead of one message at a time.
pub fn password_failures(value: &str, rules: &PasswordRules) -> Vec<PasswordError> {
    let len = char_len(value);
    let checks = [
        (PasswordError::TooShort, len < rules.min_length),
        (PasswordError::TooLong, len > rules.max_length),
        (
            PasswordError::MissingLowercase,
            !value.chars().any(|c| c.is_ascii_lowercase()),
        ),
        (
            PasswordError::MissingUppercase,
            !value.chars().any(|c| c.is_ascii_uppercase()),
        ),
        (
            PasswordError::MissingDigit,
            !value.chars().any(|c| c.is_ascii_digit()),
        ),
        (
            PasswordError::MissingSpecialChar,
            !value.chars().any(|c| rules.special_chars.contains(c)),
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(err, failed)| failed.then_some(err))
        .collect()
}
