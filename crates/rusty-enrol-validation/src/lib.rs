//! rusty-enrol validation
//!
//! Pure field validators for the student registration form. Every validator
//! takes the current text of a field and returns `Ok(())` or the first rule it
//! breaks. Validators are stateless and independent of any UI.

pub mod email;
pub mod name;
pub mod password;
pub mod rules;

pub use email::*;
pub use name::*;
pub use password::*;
pub use rules::*;
