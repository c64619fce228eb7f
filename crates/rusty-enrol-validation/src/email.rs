//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// local@domain.tld with a 2-6 letter top level domain
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$")
        .expect("email pattern is a valid regex")
});

/// Reason an email address was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EmailError {
    #[error("email address is not valid")]
    InvalidFormat,
}

impl EmailError {
    pub fn message_key(self) -> &'static str {
        match self {
            EmailError::InvalidFormat => "studentInfoForm_emailErrorText_invalid",
        }
    }
}

/// Validate email format
pub fn validate_email(value: &str) -> Result<(), EmailError> {
    if EMAIL_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(EmailError::InvalidFormat)
    }
}

pub fn is_valid_email(value: &str) -> bool {
    validate_email(value).is_ok()
}
