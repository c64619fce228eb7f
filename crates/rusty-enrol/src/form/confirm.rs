// File: src/form/confirm.rs
// Purpose: Confirmation dialog contents and the outcome of confirming

use std::collections::{BTreeMap, HashMap};

use rusty_enrol_types::{EmailAddress, Language, Password, PersonName};
use thiserror::Error;

use super::field::{Field, FieldError};
use crate::messages::Catalog;

/// Message id of the dialog title
pub const CONFIRM_TITLE_KEY: &str = "studentInfoForm_confirmInfoTitle";

/// Per-field reasons that kept the form from being confirmed
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct FormErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FormErrors {
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(field, err)| (*field, *err))
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    /// Field name -> messages map
    pub fn to_map(&self) -> HashMap<String, Vec<String>> {
        self.iter()
            .map(|(field, err)| (field.name().to_string(), vec![err.to_string()]))
            .collect()
    }
}

/// One label/value line of the confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub field: Field,
    pub value: String,
}

/// What the confirmation dialog shows. The password is never part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationSummary {
    pub rows: Vec<SummaryRow>,
}

impl ConfirmationSummary {
    pub fn title(&self, catalog: &Catalog) -> String {
        catalog.translate(CONFIRM_TITLE_KEY)
    }

    /// Rows with localized labels
    pub fn render(&self, catalog: &Catalog) -> Vec<(String, String)> {
        self.rows
            .iter()
            .map(|row| (catalog.translate(row.field.label_key()), row.value.clone()))
            .collect()
    }
}

/// Confirmed registration data. Every value already passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub native_language: Language,
    pub preferred_language: Language,
    pub first_name: PersonName,
    pub preferred_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub password: Password,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusty_enrol_validation::{EmailError, NameError};

    #[test]
    fn test_form_errors_keep_form_order() {
        let mut errors = FormErrors::default();
        errors.insert(Field::Email, EmailError::InvalidFormat.into());
        errors.insert(Field::FirstName, NameError::TooShort.into());
        errors.insert(Field::NativeLanguage, FieldError::Unselected);

        assert_eq!(
            errors.fields(),
            vec![Field::NativeLanguage, Field::FirstName, Field::Email]
        );
        assert_eq!(errors.to_string(), "3 field(s) failed validation");
    }

    #[test]
    fn test_form_errors_to_map() {
        let mut errors = FormErrors::default();
        errors.insert(Field::Email, EmailError::InvalidFormat.into());

        let map = errors.to_map();
        assert_eq!(
            map.get("email"),
            Some(&vec!["email address is not valid".to_string()])
        );
    }

    #[test]
    fn test_summary_render() {
        let catalog = Catalog::english().unwrap();
        let summary = ConfirmationSummary {
            rows: vec![SummaryRow {
                field: Field::FirstName,
                value: "Olena".to_string(),
            }],
        };
        assert_eq!(summary.title(&catalog), "Please confirm your details");
        assert_eq!(
            summary.render(&catalog),
            vec![("First name".to_string(), "Olena".to_string())]
        );
    }
}
