// File: src/form/mod.rs
// Purpose: Student registration form state and its confirmation flow

use std::collections::HashMap;
use std::fmt;

use rusty_enrol_types::{EmailAddress, Language, Password, PersonName};
use rusty_enrol_validation::{
    validate_email, validate_name, validate_name_with, validate_password,
    validate_password_with, Rules, RulesError,
};
use serde::Deserialize;

use crate::messages::Catalog;
use crate::validation::Validate;

pub mod confirm;
pub mod field;
pub mod menu;

pub use confirm::{ConfirmationSummary, FormErrors, Registration, SummaryRow};
pub use field::{Field, FieldError, FieldState};
pub use menu::{LanguageMenu, MenuKind};

/// Values the screen is opened with. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NavParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// In-memory state of one registration screen
///
/// Fields start out valid and are only checked once they are edited or the
/// user confirms the dialog. Nothing is stored or sent anywhere.
#[derive(Clone)]
pub struct StudentInfoForm {
    rules: Rules,
    native_language: LanguageMenu,
    preferred_language: LanguageMenu,
    first_name: FieldState,
    preferred_name: FieldState,
    last_name: FieldState,
    email: FieldState,
    password: FieldState,
    password_visible: bool,
    dialog_open: bool,
}

impl StudentInfoForm {
    pub fn new(params: NavParams) -> Self {
        Self::build(params, Rules::default())
    }

    /// Open the form with configured rules
    ///
    /// The rules may only tighten the defaults, so a value accepted inline is
    /// also accepted by [`StudentInfoForm::confirm`].
    pub fn with_rules(params: NavParams, rules: Rules) -> Result<Self, RulesError> {
        rules.check()?;
        Ok(Self::build(params, rules))
    }

    fn build(params: NavParams, rules: Rules) -> Self {
        let first_name = params.first_name.unwrap_or_default();
        Self {
            rules,
            native_language: LanguageMenu::default(),
            preferred_language: LanguageMenu::default(),
            preferred_name: FieldState::untouched(first_name.clone()),
            first_name: FieldState::untouched(first_name),
            last_name: FieldState::untouched(params.last_name.unwrap_or_default()),
            email: FieldState::untouched(params.email.unwrap_or_default()),
            password: FieldState::default(),
            password_visible: false,
            dialog_open: false,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    // ---------------------------------------------------------------------
    // Text inputs
    // ---------------------------------------------------------------------

    pub fn set_first_name(&mut self, value: impl Into<String>) -> Result<(), FieldError> {
        self.set_text(Field::FirstName, value.into())
    }

    pub fn set_preferred_name(&mut self, value: impl Into<String>) -> Result<(), FieldError> {
        self.set_text(Field::PreferredName, value.into())
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> Result<(), FieldError> {
        self.set_text(Field::LastName, value.into())
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> Result<(), FieldError> {
        self.set_text(Field::Email, value.into())
    }

    pub fn set_password(&mut self, value: impl Into<String>) -> Result<(), FieldError> {
        self.set_text(Field::Password, value.into())
    }

    fn set_text(&mut self, field: Field, value: String) -> Result<(), FieldError> {
        if let Some(state) = self.text_state_mut(field) {
            state.value = value;
        }
        self.revalidate(field)
    }

    /// Re-run the validator of `field` and record the outcome
    pub fn revalidate(&mut self, field: Field) -> Result<(), FieldError> {
        let outcome = self.check(field);
        let error = outcome.err();

        match field {
            Field::NativeLanguage => self.native_language.error = error,
            Field::PreferredLanguage => self.preferred_language.error = error,
            _ => {
                if let Some(state) = self.text_state_mut(field) {
                    state.error = error;
                }
            }
        }

        tracing::debug!(field = field.name(), valid = error.is_none(), ?error, "field validated");
        outcome
    }

    fn check(&self, field: Field) -> Result<(), FieldError> {
        match field {
            Field::NativeLanguage => check_language(&self.native_language),
            Field::PreferredLanguage => check_language(&self.preferred_language),
            Field::FirstName | Field::PreferredName | Field::LastName => {
                validate_name_with(self.value(field), &self.rules.name).map_err(FieldError::from)
            }
            Field::Email => validate_email(&self.email.value).map_err(FieldError::from),
            Field::Password => {
                validate_password_with(&self.password.value, &self.rules.password)
                    .map_err(FieldError::from)
            }
        }
    }

    fn text_state(&self, field: Field) -> Option<&FieldState> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::PreferredName => Some(&self.preferred_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::NativeLanguage | Field::PreferredLanguage => None,
        }
    }

    fn text_state_mut(&mut self, field: Field) -> Option<&mut FieldState> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::PreferredName => Some(&mut self.preferred_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::NativeLanguage | Field::PreferredLanguage => None,
        }
    }

    fn menu(&self, kind: MenuKind) -> &LanguageMenu {
        match kind {
            MenuKind::Native => &self.native_language,
            MenuKind::Preferred => &self.preferred_language,
        }
    }

    fn menu_mut(&mut self, kind: MenuKind) -> &mut LanguageMenu {
        match kind {
            MenuKind::Native => &mut self.native_language,
            MenuKind::Preferred => &mut self.preferred_language,
        }
    }

    /// Current text of `field`; a language field yields its display name or ""
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::NativeLanguage => self.native_language.selected.map_or("", Language::display_name),
            Field::PreferredLanguage => {
                self.preferred_language.selected.map_or("", Language::display_name)
            }
            _ => self.text_state(field).map_or("", |state| state.value.as_str()),
        }
    }

    /// Error recorded by the last validation of `field`
    pub fn error(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::NativeLanguage => self.native_language.error,
            Field::PreferredLanguage => self.preferred_language.error,
            _ => self.text_state(field).and_then(|state| state.error),
        }
    }

    pub fn is_valid(&self, field: Field) -> bool {
        self.error(field).is_none()
    }

    /// Text under the input: info text while valid, the error text otherwise
    pub fn helper_text(&self, field: Field, catalog: &Catalog) -> String {
        match self.error(field) {
            Some(err) => catalog.translate(&err.message_key(field)),
            None => catalog.translate(field.helper_key()),
        }
    }

    /// Heading of the screen, greeting the student by first name
    pub fn greeting(&self, catalog: &Catalog) -> String {
        catalog.format_with("common_welcome", &[("firstName", self.first_name.value.as_str())])
    }

    // ---------------------------------------------------------------------
    // Password visibility
    // ---------------------------------------------------------------------

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    /// Password as the input shows it: plain text or one bullet per character
    pub fn displayed_password(&self) -> String {
        if self.password_visible {
            self.password.value.clone()
        } else {
            "•".repeat(self.password.value.chars().count())
        }
    }

    // ---------------------------------------------------------------------
    // Language menus
    // ---------------------------------------------------------------------

    pub fn open_menu(&mut self, kind: MenuKind) {
        self.menu_mut(kind).open = true;
    }

    pub fn dismiss_menu(&mut self, kind: MenuKind) {
        self.menu_mut(kind).open = false;
    }

    pub fn is_menu_open(&self, kind: MenuKind) -> bool {
        self.menu(kind).open
    }

    pub fn menu_items(&self, kind: MenuKind) -> &'static [Language] {
        kind.items()
    }

    /// Choose a language; closes the menu
    pub fn select_language(&mut self, kind: MenuKind, language: Language) {
        self.menu_mut(kind).select(language);
        tracing::debug!(menu = ?kind, code = language.code(), "language selected");
    }

    pub fn language(&self, kind: MenuKind) -> Option<Language> {
        self.menu(kind).selected
    }

    /// Menu button text: a prompt until something is chosen
    pub fn language_label(&self, kind: MenuKind, catalog: &Catalog) -> String {
        match self.menu(kind).selected {
            Some(language) => language.display_name().to_string(),
            None => catalog.translate(kind.placeholder_key()),
        }
    }

    // ---------------------------------------------------------------------
    // Confirmation dialog
    // ---------------------------------------------------------------------

    /// Submit button: opens the confirmation dialog
    pub fn request_submit(&mut self) {
        self.dialog_open = true;
        tracing::info!("confirmation dialog opened");
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Close the dialog without confirming
    pub fn cancel(&mut self) {
        self.dialog_open = false;
        tracing::info!("confirmation dialog cancelled");
    }

    pub fn summary(&self) -> ConfirmationSummary {
        let rows = [
            Field::NativeLanguage,
            Field::PreferredLanguage,
            Field::FirstName,
            Field::PreferredName,
            Field::LastName,
            Field::Email,
        ]
        .into_iter()
        .map(|field| SummaryRow {
            field,
            value: self.value(field).to_string(),
        })
        .collect();

        ConfirmationSummary { rows }
    }

    /// Validate every field and mark the invalid ones
    pub fn validate_all(&mut self) -> FormErrors {
        let mut errors = FormErrors::default();
        for field in Field::ALL {
            if let Err(err) = self.revalidate(field) {
                errors.insert(field, err);
            }
        }
        errors
    }

    /// Confirm button: closes the dialog and hands back the validated data
    pub fn confirm(&mut self) -> Result<Registration, FormErrors> {
        self.dialog_open = false;

        let errors = self.validate_all();
        if !errors.is_empty() {
            tracing::info!(invalid = errors.len(), "confirmation blocked by invalid fields");
            return Err(errors);
        }

        let registration = match self.build_registration() {
            Ok(registration) => registration,
            Err(errors) => {
                for (field, err) in errors.iter() {
                    if let Some(state) = self.text_state_mut(field) {
                        state.error = Some(err);
                    }
                }
                return Err(errors);
            }
        };
        tracing::info!(
            native = registration.native_language.code(),
            preferred = registration.preferred_language.code(),
            "registration confirmed"
        );
        Ok(registration)
    }

    // The typed values enforce the default rules. Configured rules never
    // loosen them, so this only fails for fields validate_all rejected too.
    fn build_registration(&self) -> Result<Registration, FormErrors> {
        let mut errors = FormErrors::default();

        let mut name = |field: Field| {
            let value = self.value(field).to_string();
            match PersonName::try_new(value) {
                Ok(name) => Some(name),
                Err(_) => {
                    if let Err(err) = validate_name(self.value(field)) {
                        errors.insert(field, err.into());
                    }
                    None
                }
            }
        };
        let first_name = name(Field::FirstName);
        let preferred_name = name(Field::PreferredName);
        let last_name = name(Field::LastName);

        let email = EmailAddress::try_new(self.email.value.clone()).ok();
        if email.is_none() {
            if let Err(err) = validate_email(&self.email.value) {
                errors.insert(Field::Email, err.into());
            }
        }

        let password = Password::try_new(self.password.value.clone()).ok();
        if password.is_none() {
            if let Err(err) = validate_password(&self.password.value) {
                errors.insert(Field::Password, err.into());
            }
        }

        match (
            self.native_language.selected,
            self.preferred_language.selected,
            first_name,
            preferred_name,
            last_name,
            email,
            password,
        ) {
            (
                Some(native_language),
                Some(preferred_language),
                Some(first_name),
                Some(preferred_name),
                Some(last_name),
                Some(email),
                Some(password),
            ) => Ok(Registration {
                native_language,
                preferred_language,
                first_name,
                preferred_name,
                last_name,
                email,
                password,
            }),
            _ => Err(errors),
        }
    }
}

fn check_language(menu: &LanguageMenu) -> Result<(), FieldError> {
    menu.selected.map(|_| ()).ok_or(FieldError::Unselected)
}

impl fmt::Debug for StudentInfoForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudentInfoForm")
            .field("native_language", &self.native_language)
            .field("preferred_language", &self.preferred_language)
            .field("first_name", &self.first_name)
            .field("preferred_name", &self.preferred_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password_error", &self.password.error)
            .field("dialog_open", &self.dialog_open)
            .finish_non_exhaustive()
    }
}

impl Validate for StudentInfoForm {
    fn validate(&self) -> Result<(), HashMap<String, Vec<String>>> {
        let mut errors = FormErrors::default();
        for field in Field::ALL {
            if let Err(err) = self.check(field) {
                errors.insert(field, err);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.to_map())
        }
    }
}
