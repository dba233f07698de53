//! # Authform Shared
//!
//! Wire types shared by the auth client and any front end.
//! Nothing in here performs I/O.

pub mod dto;
pub mod fields;

pub use dto::{AuthResponseBody, ErrorResponseBody, LoginRequest, RegisterUserRequest};
pub use fields::{FieldDescriptor, InputType, LOGIN_FIELDS, REGISTER_FIELDS};
