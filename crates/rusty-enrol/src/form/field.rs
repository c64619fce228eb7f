// File: src/form/field.rs
// Purpose: Form fields, their per-field state and error reasons

use rusty_enrol_validation::{EmailError, NameError, NameField, PasswordError};
use thiserror::Error;

/// Every input on the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    NativeLanguage,
    PreferredLanguage,
    FirstName,
    PreferredName,
    LastName,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::NativeLanguage,
        Field::PreferredLanguage,
        Field::FirstName,
        Field::PreferredName,
        Field::LastName,
        Field::Email,
        Field::Password,
    ];

    /// Stable snake_case name, used as the key in error maps
    pub fn name(self) -> &'static str {
        match self {
            Field::NativeLanguage => "native_language",
            Field::PreferredLanguage => "preferred_language",
            Field::FirstName => "first_name",
            Field::PreferredName => "preferred_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Message id of the field's label
    pub fn label_key(self) -> &'static str {
        match self {
            Field::NativeLanguage => "common_nativeLanguage",
            Field::PreferredLanguage => "common_preferredLanguage",
            Field::FirstName => "common_firstName",
            Field::PreferredName => "common_preferredName",
            Field::LastName => "common_lastName",
            Field::Email => "common_emailAddress",
            Field::Password => "common_passwordTitle",
        }
    }

    /// Message id of the info text shown while the field is valid
    pub fn helper_key(self) -> &'static str {
        match self {
            Field::NativeLanguage => "studentInfoForm_nativeLanguageHelperText",
            Field::PreferredLanguage => "studentInfoForm_preferredLanguageHelperText",
            Field::FirstName => "studentInfoForm_inputFirstNameHelperText",
            Field::PreferredName => "studentInfoForm_inputPreferredNameHelperText",
            Field::LastName => "studentInfoForm_inputLastNameHelperText",
            Field::Email => "studentInfoForm_emailHelperText",
            Field::Password => "studentInfoForm_passwordHelperText",
        }
    }

    pub fn name_field(self) -> Option<NameField> {
        match self {
            Field::FirstName => Some(NameField::First),
            Field::PreferredName => Some(NameField::Preferred),
            Field::LastName => Some(NameField::Last),
            _ => None,
        }
    }
}

/// Why a field is invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error("no language selected")]
    Unselected,
}

impl FieldError {
    /// Message id of the error text shown under `field`
    pub fn message_key(self, field: Field) -> String {
        match self {
            FieldError::Name(err) => err
                .message_key(field.name_field().unwrap_or(NameField::First)),
            FieldError::Email(err) => err.message_key().to_string(),
            FieldError::Password(err) => err.message_key().to_string(),
            FieldError::Unselected => match field {
                Field::PreferredLanguage => "studentInfoForm_selectPreferredLanguage",
                _ => "studentInfoForm_selectNativeLanguage",
            }
            .to_string(),
        }
    }
}

/// Current text of an input and the outcome of its last validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<FieldError>,
}

impl FieldState {
    /// A pre-filled field that has not been validated yet
    pub fn untouched(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}
