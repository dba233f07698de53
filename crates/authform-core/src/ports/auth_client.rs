//! Authentication service port.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::{Credentials, RegistrationInput};

/// Successful login payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginSuccess {
    /// Bearer token. The service may omit it even on success.
    pub token: Option<String>,
    pub message: Option<String>,
    pub data: Option<Map<String, Value>>,
}

/// Successful registration payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterSuccess {
    pub message: Option<String>,
    pub data: Option<Map<String, Value>>,
}

/// The service rejected the request, or its answer could not be understood.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFailure {
    /// Message from the error payload, if it carried one.
    pub message: Option<String>,
    /// HTTP status, when the failure came from a response.
    pub status: Option<u16>,
}

impl AuthFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            status: None,
        }
    }

    /// A response arrived but did not have any shape we recognise.
    pub fn unexpected_shape(status: Option<u16>) -> Self {
        Self {
            message: None,
            status,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Normalized result of an auth call. Callers must handle both arms.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome<T> {
    Success(T),
    Failure(AuthFailure),
}

/// Client for the remote authentication service.
///
/// Implementations never return transport errors to the caller; every
/// problem is folded into [`AuthOutcome::Failure`].
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> AuthOutcome<LoginSuccess>;

    /// `POST /auth/register`
    async fn register(&self, input: &RegistrationInput) -> AuthOutcome<RegisterSuccess>;
}
