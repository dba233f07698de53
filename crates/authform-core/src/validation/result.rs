use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::Field;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    InvalidFormat,
    Required,
    TooShort,
    MissingUppercase,
    MissingDigit,
    MissingSpecial,
}

impl FieldErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            FieldErrorKind::InvalidFormat => "invalid_format",
            FieldErrorKind::Required => "required",
            FieldErrorKind::TooShort => "too_short",
            FieldErrorKind::MissingUppercase => "missing_uppercase",
            FieldErrorKind::MissingDigit => "missing_digit",
            FieldErrorKind::MissingSpecial => "missing_special",
        }
    }

    /// Map a `validator` error code back to a kind.
    ///
    /// Codes we never assign fall back to `InvalidFormat`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "required" => FieldErrorKind::Required,
            "too_short" => FieldErrorKind::TooShort,
            "missing_uppercase" => FieldErrorKind::MissingUppercase,
            "missing_digit" => FieldErrorKind::MissingDigit,
            "missing_special" => FieldErrorKind::MissingSpecial,
            _ => FieldErrorKind::InvalidFormat,
        }
    }
}

/// A failed rule together with its human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Field name to failures. A field that is absent is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<Field, Vec<FieldError>>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record another failure for `field`, after any already recorded.
    pub fn push(&mut self, field: Field, error: FieldError) {
        self.errors.entry(field).or_default().push(error);
    }

    pub fn errors_for(&self, field: Field) -> &[FieldError] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The message a form shows inline next to the field.
    pub fn first_message(&self, field: Field) -> Option<&str> {
        self.errors_for(field).first().map(|e| e.message.as_str())
    }

    pub fn messages(&self, field: Field) -> Vec<&str> {
        self.errors_for(field)
            .iter()
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn has_error(&self, field: Field, kind: FieldErrorKind) -> bool {
        self.errors_for(field).iter().any(|e| e.kind == kind)
    }

    /// Fields with at least one failure, in declaration order.
    pub fn invalid_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }
}
