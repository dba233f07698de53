//! Domain inputs - what the user types into each form.

mod credentials;
mod field;
mod registration;

pub use credentials::Credentials;
pub use field::Field;
pub use registration::RegistrationInput;
