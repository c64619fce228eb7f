//! # rusty-enrol
//!
//! State of the student registration screen: native and preferred language
//! menus, name/email/password inputs with inline validation, and the
//! confirmation dialog shown before submitting.
//!
//! ```rust,ignore
//! use rusty_enrol::{Catalog, Field, MenuKind, NavParams, StudentInfoForm};
//! use rusty_enrol::types::Language;
//!
//! let catalog = Catalog::english()?;
//! let mut form = StudentInfoForm::new(NavParams {
//!     first_name: Some("Olena".into()),
//!     last_name: Some("Shevchenko".into()),
//!     email: Some("olena@uni.edu".into()),
//! });
//!
//! form.select_language(MenuKind::Native, Language::Uk);
//! form.select_language(MenuKind::Preferred, Language::En);
//! form.set_password("Abc123!@")?;
//!
//! form.request_submit();
//! let registration = form.confirm()?;
//! ```
//!
//! ## Crates
//!
//! - **`rusty-enrol-validation`** - the pure field validators
//! - **`rusty-enrol-types`** - validated newtypes and the `Language` list
//! - **`rusty-enrol`** - this crate: form state, messages, configuration

pub mod config;
pub mod form;
pub mod messages;
pub mod validation;

pub use config::{EnrolConfig, UiConfig};
pub use form::{
    ConfirmationSummary, Field, FieldError, FieldState, FormErrors, LanguageMenu, MenuKind,
    NavParams, Registration, StudentInfoForm, SummaryRow,
};
pub use messages::Catalog;
pub use validation::{Validate, ValidationResult};

pub use rusty_enrol_types as types;
pub use rusty_enrol_validation as rules;
