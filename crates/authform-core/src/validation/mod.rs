//! Validation schema - pure rules deciding whether form input is acceptable.

mod result;
mod schema;

pub use result::{FieldError, FieldErrorKind, ValidationResult};
pub use schema::{PASSWORD_SPECIAL_CHARS, validate_login, validate_registration};
