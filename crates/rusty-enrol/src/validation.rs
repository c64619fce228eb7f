// File: src/validation.rs
// Purpose: Validation runtime and validator trait

use std::collections::HashMap;

/// Trait for types that can be validated as a whole
///
/// Implemented by the registration form; keys are snake_case field names
pub trait Validate {
    /// Validates every field without changing any state
    ///
    /// Returns Ok(()) if valid, or Err with a map of field names to error messages
    /// Each failing field carries the message of its first failed rule
    fn validate(&self) -> Result<(), HashMap<String, Vec<String>>>;
}

/// Result of validation with errors, keyed like [`Validate::validate`]
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationResult {
    /// Create a result with no failed fields
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: HashMap::new(),
        }
    }

    /// Create a failed result from the field error map
    pub fn failure(errors: HashMap<String, Vec<String>>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    /// Convert the outcome of [`Validate::validate`]
    pub fn from_result(result: Result<(), HashMap<String, Vec<String>>>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(errors) => Self::failure(errors),
        }
    }

    /// Check whether any field failed
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// First message recorded for `field`
    pub fn get_error(&self, field: &str) -> Option<&String> {
        self.errors.get(field).and_then(|errors| errors.first())
    }

    /// Every message recorded for `field`
    pub fn get_errors(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ok() {
        let result = ValidationResult::from_result(Ok(()));
        assert!(result.is_valid);
        assert!(!result.has_errors());
        assert!(result.get_error("email").is_none());
    }

    #[test]
    fn test_from_err() {
        let mut errors = HashMap::new();
        errors.insert(
            "email".to_string(),
            vec!["email address is not valid".to_string()],
        );

        let result = ValidationResult::from_result(Err(errors));
        assert!(!result.is_valid);
        assert_eq!(
            result.get_error("email").map(String::as_str),
            Some("email address is not valid")
        );
        assert_eq!(result.get_errors("email").map(Vec::len), Some(1));
    }
}
