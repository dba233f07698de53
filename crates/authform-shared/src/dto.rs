//! Data Transfer Objects - request/response bodies of the auth endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful response of either endpoint.
///
/// Every field is optional; the caller decides what a missing one means.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Some backends name the token `access_token` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl AuthResponseBody {
    /// The bearer token under either of its names.
    pub fn into_token(self) -> Option<String> {
        self.token.or(self.access_token)
    }
}

/// `"error"` member of an error response: either a bare string or an object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorField {
    Text(String),
    Object {
        #[serde(default)]
        message: Option<String>,
    },
}

/// Error response of either endpoint.
///
/// Accepts `{"message": ..}`, `{"error": {"message": ..}}`, `{"error": ".."}`
/// and RFC 7807 problem details (`detail`, `title`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ErrorResponseBody {
    /// Most specific human-readable message the body carries.
    pub fn into_message(self) -> Option<String> {
        let nested = match self.error {
            Some(ErrorField::Text(text)) => Some(text),
            Some(ErrorField::Object { message }) => message,
            None => None,
        };
        nested.or(self.message).or(self.detail).or(self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_message(json: &str) -> Option<String> {
        serde_json::from_str::<ErrorResponseBody>(json)
            .unwrap()
            .into_message()
    }

    #[test]
    fn test_error_message_shapes() {
        assert_eq!(
            error_message(r#"{"error": {"message": "bad creds"}}"#),
            Some("bad creds".to_string())
        );
        assert_eq!(
            error_message(r#"{"message": "bad creds"}"#),
            Some("bad creds".to_string())
        );
        assert_eq!(
            error_message(r#"{"error": "bad creds"}"#),
            Some("bad creds".to_string())
        );
        assert_eq!(
            error_message(r#"{"type": "about:blank", "title": "Unauthorized", "status": 401}"#),
            Some("Unauthorized".to_string())
        );
        assert_eq!(
            error_message(r#"{"title": "Bad Request", "status": 400, "detail": "email taken"}"#),
            Some("email taken".to_string())
        );
    }

    #[test]
    fn test_error_without_message() {
        assert_eq!(error_message(r#"{"error": {"code": 7}}"#), None);
        assert_eq!(error_message("{}"), None);
    }

    #[test]
    fn test_auth_response_token_aliases() {
        let body: AuthResponseBody =
            serde_json::from_str(r#"{"token": "T1", "message": "ok"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("ok"));
        assert_eq!(body.into_token(), Some("T1".to_string()));

        let body: AuthResponseBody =
            serde_json::from_str(r#"{"access_token": "T2", "token_type": "Bearer"}"#).unwrap();
        assert_eq!(body.into_token(), Some("T2".to_string()));
    }

    #[test]
    fn test_register_request_wire_shape() {
        let body = serde_json::to_value(RegisterUserRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "Abcdef1!".to_string(),
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "Abcdef1!",
            })
        );
    }
}
