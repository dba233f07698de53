//! # Authform Core
//!
//! The domain layer of the authentication forms.
//! This crate holds the validation rules, the collaborator ports, and the
//! form controllers. It performs no I/O of its own.

pub mod domain;
pub mod error;
pub mod forms;
pub mod ports;
pub mod validation;

pub use error::FormError;
pub use forms::{FormSettings, FormState, LoginForm, RegisterForm, SubmitOutcome};
pub use validation::{FieldError, FieldErrorKind, ValidationResult};
