// File: src/form/menu.rs
// Purpose: Native / preferred language drop-down menus

use rusty_enrol_types::{Language, NATIVE_MENU, PREFERRED_MENU};

use super::field::{Field, FieldError};

/// Which of the two language menus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKind {
    Native,
    Preferred,
}

impl MenuKind {
    pub fn field(self) -> Field {
        match self {
            MenuKind::Native => Field::NativeLanguage,
            MenuKind::Preferred => Field::PreferredLanguage,
        }
    }

    /// Entries in the order the menu lists them
    pub fn items(self) -> &'static [Language] {
        match self {
            MenuKind::Native => &NATIVE_MENU,
            MenuKind::Preferred => &PREFERRED_MENU,
        }
    }

    /// Message id of the button text while nothing is chosen
    pub fn placeholder_key(self) -> &'static str {
        match self {
            MenuKind::Native => "studentInfoForm_selectNativeLanguage",
            MenuKind::Preferred => "studentInfoForm_selectPreferredLanguage",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            MenuKind::Native => "studentInfoForm_nativeLanguageLabel",
            MenuKind::Preferred => "studentInfoForm_preferredLanguageLabel",
        }
    }
}

/// A language selection and whether its menu is showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMenu {
    pub selected: Option<Language>,
    pub open: bool,
    /// Set when a confirmation found nothing selected
    pub error: Option<FieldError>,
}

impl LanguageMenu {
    pub fn select(&mut self, language: Language) {
        self.selected = Some(language);
        self.open = false;
        self.error = None;
    }
}
