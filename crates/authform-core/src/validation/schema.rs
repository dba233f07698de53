//! The login and registration rule sets.

use validator::{Validate, ValidationErrors};

use crate::domain::{Credentials, Field, RegistrationInput};

use super::{FieldError, FieldErrorKind, ValidationResult};

/// Characters that satisfy the "special character" password rule.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

struct PasswordRule {
    kind: FieldErrorKind,
    message: &'static str,
    matches: fn(char) -> bool,
}

const PASSWORD_CONTENT_RULES: [PasswordRule; 3] = [
    PasswordRule {
        kind: FieldErrorKind::MissingUppercase,
        message: "Password must contain at least one uppercase letter",
        matches: |c| c.is_ascii_uppercase(),
    },
    PasswordRule {
        kind: FieldErrorKind::MissingDigit,
        message: "Password must contain at least one digit",
        matches: |c| c.is_ascii_digit(),
    },
    PasswordRule {
        kind: FieldErrorKind::MissingSpecial,
        message: "Password must contain at least one special character",
        matches: |c| PASSWORD_SPECIAL_CHARS.contains(c),
    },
];

/// Validate login credentials.
pub fn validate_login(credentials: &Credentials) -> ValidationResult {
    let mut result = ValidationResult::new();
    if let Err(errors) = credentials.validate() {
        collect_validator_errors(&errors, &mut result);
    }
    result
}

/// Validate a registration request.
///
/// Every password rule is evaluated, so a weak password reports each
/// missing requirement rather than only the first.
pub fn validate_registration(input: &RegistrationInput) -> ValidationResult {
    let mut result = ValidationResult::new();
    if let Err(errors) = input.validate() {
        collect_validator_errors(&errors, &mut result);
    }

    for rule in &PASSWORD_CONTENT_RULES {
        if !input.password.chars().any(rule.matches) {
            result.push(Field::Password, FieldError::new(rule.kind, rule.message));
        }
    }

    result
}

fn collect_validator_errors(errors: &ValidationErrors, result: &mut ValidationResult) {
    // Walk fields in a fixed order; the validator map is unordered.
    let field_errors = errors.field_errors();
    for field in [Field::Username, Field::Email, Field::Password] {
        let Some(errs) = field_errors.get(field.as_str()) else {
            continue;
        };
        for err in errs.iter() {
            let kind = FieldErrorKind::from_code(&err.code);
            let message = err
                .message
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| kind.code().to_string());
            result.push(field, FieldError::new(kind, message));
        }
    }
}
