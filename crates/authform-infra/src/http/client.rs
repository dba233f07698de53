//! reqwest-based client for the remote authentication service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;

use authform_core::domain::{Credentials, RegistrationInput};
use authform_core::ports::{AuthClient, AuthFailure, AuthOutcome, LoginSuccess, RegisterSuccess};
use authform_shared::{AuthResponseBody, ErrorResponseBody, LoginRequest, RegisterUserRequest};

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";

/// Auth service connection configuration.
#[derive(Debug, Clone)]
pub struct AuthApiConfig {
    /// Base URL of the service (e.g., http://localhost:8000)
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for AuthApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl AuthApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("AUTH_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            timeout: Duration::from_secs(
                std::env::var("AUTH_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }
}

/// Errors raised while building the client. Requests themselves never fail
/// with these; see [`AuthClient`].
#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    #[error("Invalid auth API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Auth client speaking JSON over HTTP.
///
/// Keeps a cookie store so cookies set by the service are sent back on
/// later requests.
pub struct HttpAuthClient {
    client: Client,
    base_url: Url,
}

impl HttpAuthClient {
    pub fn new(config: AuthApiConfig) -> Result<Self, HttpClientError> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            HttpClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: e.to_string(),
            }
        })?;
        if base_url.cannot_be_a_base() {
            return Err(HttpClientError::InvalidBaseUrl {
                url: config.base_url,
                reason: "not a base URL".to_string(),
            });
        }

        let client = Client::builder()
            .cookie_store(true)
            .timeout(config.timeout)
            .build()?;

        tracing::info!(base_url = %base_url, "Auth API client configured");

        Ok(Self { client, base_url })
    }

    /// Create from environment configuration.
    pub fn from_env() -> Result<Self, HttpClientError> {
        Self::new(AuthApiConfig::from_env())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// POST a JSON body and normalize whatever comes back.
    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> AuthOutcome<AuthResponseBody> {
        let url = self.endpoint(path);

        let response = match self.client.post(&url).json(body).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Auth request failed");
                return AuthOutcome::Failure(AuthFailure::unexpected_shape(None));
            }
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(url = %url, status = status.as_u16(), error = %e, "Failed to read auth response");
                return AuthOutcome::Failure(AuthFailure::unexpected_shape(Some(status.as_u16())));
            }
        };

        if status.is_success() {
            match decode_success_body(&bytes) {
                Ok(AuthOutcome::Success(body)) => AuthOutcome::Success(body),
                Ok(AuthOutcome::Failure(failure)) => {
                    tracing::debug!(url = %url, status = status.as_u16(), message = ?failure.message, "Auth request rejected in a success response");
                    AuthOutcome::Failure(failure.with_status(status.as_u16()))
                }
                Err(e) => {
                    tracing::warn!(url = %url, status = status.as_u16(), error = %e, "Unrecognised auth response");
                    AuthOutcome::Failure(AuthFailure::unexpected_shape(Some(status.as_u16())))
                }
            }
        } else {
            let message = serde_json::from_slice::<ErrorResponseBody>(&bytes)
                .ok()
                .and_then(ErrorResponseBody::into_message);
            tracing::debug!(url = %url, status = status.as_u16(), message = ?message, "Auth request rejected");
            AuthOutcome::Failure(AuthFailure {
                message,
                status: Some(status.as_u16()),
            })
        }
    }
}

/// Decode a 2xx body. One carrying a non-null `error` member is a failure.
fn decode_success_body(bytes: &[u8]) -> Result<AuthOutcome<AuthResponseBody>, serde_json::Error> {
    let value: Value = serde_json::from_slice(bytes)?;

    if value.get("error").is_some_and(|error| !error.is_null()) {
        let message = serde_json::from_value::<ErrorResponseBody>(value)
            .ok()
            .and_then(ErrorResponseBody::into_message);
        return Ok(AuthOutcome::Failure(AuthFailure {
            message,
            status: None,
        }));
    }

    serde_json::from_value(value).map(AuthOutcome::Success)
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> AuthOutcome<LoginSuccess> {
        let body = LoginRequest {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        };

        match self.post(LOGIN_PATH, &body).await {
            AuthOutcome::Success(body) => AuthOutcome::Success(LoginSuccess {
                message: body.message.clone(),
                data: body.data.clone(),
                token: body.into_token(),
            }),
            AuthOutcome::Failure(failure) => AuthOutcome::Failure(failure),
        }
    }

    async fn register(&self, input: &RegistrationInput) -> AuthOutcome<RegisterSuccess> {
        let body = RegisterUserRequest {
            username: input.username.clone(),
            email: input.email.clone(),
            password: input.password.clone(),
        };

        match self.post(REGISTER_PATH, &body).await {
            AuthOutcome::Success(body) => AuthOutcome::Success(RegisterSuccess {
                message: body.message,
                data: body.data,
            }),
            AuthOutcome::Failure(failure) => AuthOutcome::Failure(failure),
        }
    }
}
