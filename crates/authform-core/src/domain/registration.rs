use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration form input.
///
/// Only the length and email-shape rules live on the derive; the password
/// content rules are checked by [`crate::validation::validate_registration`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegistrationInput {
    #[validate(length(
        min = 3,
        code = "too_short",
        message = "Username must be at least 3 characters long"
    ))]
    pub username: String,

    #[validate(email(code = "invalid_format", message = "Invalid email address"))]
    pub email: String,

    #[validate(length(
        min = 8,
        code = "too_short",
        message = "Password must be at least 8 characters long"
    ))]
    pub password: String,
}

impl RegistrationInput {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
