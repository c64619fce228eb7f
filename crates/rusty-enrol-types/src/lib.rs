//! Validated types for the registration form
//!
//! Newtype wrappers built with `nutype` whose constructors run the same rules
//! as the inline validators, so a value of one of these types is always one
//! the form would accept.
//!
//! ```rust,ignore
//! use rusty_enrol_types::{EmailAddress, PersonName};
//!
//! let name = PersonName::try_new("Olena".to_string())?;     // ✓
//! let bad = PersonName::try_new("O".to_string());           // ✗ too short
//! let email = EmailAddress::try_new("a@b.com".to_string())?; // ✓
//! ```

use std::fmt;

use nutype::nutype;
use rusty_enrol_validation::{validate_email, validate_name, validate_password};

pub mod language;

pub use language::{Language, LanguageError, NATIVE_MENU, PREFERRED_MENU};

// =============================================================================
// Names
// =============================================================================

/// First, preferred or last name: 2-30 ASCII letters
#[nutype(
    validate(predicate = is_valid_name),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PersonName(String);

fn is_valid_name(s: &str) -> bool {
    validate_name(s).is_ok()
}

// =============================================================================
// Email
// =============================================================================

/// Email address in `local@domain.tld` form
#[nutype(
    validate(predicate = is_valid_email),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmailAddress(String);

fn is_valid_email(s: &str) -> bool {
    validate_email(s).is_ok()
}

// =============================================================================
// Password
// =============================================================================

/// Password meeting every strength rule
///
/// Not `Display`, and `Debug` masks the contents.
#[nutype(
    validate(predicate = is_valid_password),
    derive(Clone, PartialEq, Eq, AsRef, TryFrom, Deserialize)
)]
pub struct Password(String);

fn is_valid_password(s: &str) -> bool {
    validate_password(s).is_ok()
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
