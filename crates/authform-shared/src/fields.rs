//! Declarative field lists for both forms.
//!
//! Front ends walk these to build their inputs instead of hard-coding them.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Email,
    Password,
}

impl InputType {
    /// Whether typed characters should be hidden.
    pub fn is_secret(&self) -> bool {
        matches!(self, InputType::Password)
    }
}

/// One input on a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Wire name, matching the request body key.
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: InputType,
    pub placeholder: &'static str,
}

pub const LOGIN_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "email",
        label: "Email",
        input_type: InputType::Email,
        placeholder: "m@example.com",
    },
    FieldDescriptor {
        name: "password",
        label: "Password",
        input_type: InputType::Password,
        placeholder: "",
    },
];

pub const REGISTER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "username",
        label: "Name",
        input_type: InputType::Text,
        placeholder: "Enter your name",
    },
    FieldDescriptor {
        name: "email",
        label: "E-mail",
        input_type: InputType::Email,
        placeholder: "Enter your e-mail",
    },
    FieldDescriptor {
        name: "password",
        label: "Password",
        input_type: InputType::Password,
        placeholder: "Enter a password",
    },
];
