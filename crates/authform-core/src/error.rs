//! Domain-level error types.

use thiserror::Error;

use crate::domain::Field;

/// Form errors - misuse of a form controller by its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("The {form} form has no `{field}` field")]
    UnknownField { form: &'static str, field: Field },

    #[error("Unknown field name: {0}")]
    UnknownFieldName(String),
}
