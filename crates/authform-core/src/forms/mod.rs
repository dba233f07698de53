//! Form controllers - bind input, validation and submission together.
//!
//! Each controller is either `Idle` or `Submitting`. A `submit()` call made
//! while another one is in flight is turned away with [`SubmitOutcome::Busy`]
//! instead of dispatching a second request.

mod login;
mod register;

#[cfg(test)]
mod test_support;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::ports::SessionError;
use crate::validation::ValidationResult;

pub use login::{
    LOGIN_FAILED_MESSAGE, LoginForm, MISSING_TOKEN_MESSAGE, SESSION_WRITE_FAILED_MESSAGE,
};
pub use register::{REGISTER_FAILED_MESSAGE, REGISTERED_MESSAGE, RegisterForm};

/// Submission state of a single form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
}

/// What a call to `submit()` ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission was already in flight; nothing was done.
    Busy,
    /// Input failed validation; nothing was sent.
    Invalid(ValidationResult),
    /// Token stored in both sinks and the user was sent to `destination`.
    LoggedIn { token: String, destination: String },
    /// The service accepted the login but returned no token.
    MissingToken,
    /// The token could not be written to a session sink.
    SessionWriteFailed(SessionError),
    Registered { message: String },
    /// The service rejected the request or answered with something unreadable.
    Rejected {
        message: String,
        status: Option<u16>,
    },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            SubmitOutcome::LoggedIn { .. } | SubmitOutcome::Registered { .. }
        )
    }
}

/// Where and for how long the session token is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSettings {
    pub cookie_name: String,
    pub cookie_path: String,
    pub cookie_max_age: Duration,
    /// Key of the token in the local store.
    pub token_key: String,
    pub post_login_path: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            cookie_name: "access_token".to_string(),
            cookie_path: "/".to_string(),
            cookie_max_age: Duration::from_secs(3600),
            token_key: "token".to_string(),
            post_login_path: "/dashboard".to_string(),
        }
    }
}

/// Holds the `Submitting` flag for as long as it lives.
///
/// Dropping it (normally, or because the submit future was dropped) puts the
/// form back to `Idle`.
struct Submission<'a> {
    flag: &'a AtomicBool,
}

impl<'a> Submission<'a> {
    fn begin(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

fn state_of(flag: &AtomicBool) -> FormState {
    if flag.load(Ordering::Acquire) {
        FormState::Submitting
    } else {
        FormState::Idle
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Treat blank server messages the same as missing ones.
fn non_blank(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}
