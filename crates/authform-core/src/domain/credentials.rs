use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login form input. Created per submission attempt, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Credentials {
    #[validate(email(code = "invalid_format", message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, code = "required", message = "Password is required"))]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
