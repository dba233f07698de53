//! Ports - trait definitions for external collaborators.
//! These are the "interfaces" that infrastructure must implement.

mod auth_client;
mod notifier;
mod session;

pub use auth_client::{AuthClient, AuthFailure, AuthOutcome, LoginSuccess, RegisterSuccess};
pub use notifier::Notifier;
pub use session::{CookieJar, LocalStore, Navigator, SessionError, SessionSinks};
