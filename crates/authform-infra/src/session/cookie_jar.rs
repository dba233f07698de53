//! In-memory cookie jar - stands in for the browser jar outside a browser.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;

use authform_core::ports::{CookieJar, SessionError};

/// A cookie as it sits in the jar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub max_age: Duration,
    pub expires_at: DateTime<Utc>,
}

impl Cookie {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Cookie jar backed by a HashMap with async RwLock.
///
/// Expired cookies are dropped when read.
/// Note: Cookies are lost on process restart.
pub struct InMemoryCookieJar {
    cookies: RwLock<HashMap<String, Cookie>>,
}

impl InMemoryCookieJar {
    pub fn new() -> Self {
        Self {
            cookies: RwLock::new(HashMap::new()),
        }
    }

    /// Get a live cookie by name.
    pub async fn get(&self, name: &str) -> Option<Cookie> {
        let cookies = self.cookies.read().await;
        let cookie = cookies.get(name)?;

        if cookie.is_expired(Utc::now()) {
            drop(cookies);
            let mut cookies = self.cookies.write().await;
            cookies.remove(name);
            return None;
        }

        Some(cookie.clone())
    }

    pub async fn value(&self, name: &str) -> Option<String> {
        self.get(name).await.map(|c| c.value)
    }

    fn check_token(kind: &str, text: &str) -> Result<(), SessionError> {
        if text.chars().any(|c| c == ';' || c == ',' || c.is_whitespace() || c.is_control()) {
            return Err(SessionError::Cookie(format!(
                "{kind} contains characters not allowed in a cookie: {text:?}"
            )));
        }
        Ok(())
    }
}

impl Default for InMemoryCookieJar {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CookieJar for InMemoryCookieJar {
    async fn set_cookie(
        &self,
        name: &str,
        value: &str,
        path: &str,
        max_age: Duration,
    ) -> Result<(), SessionError> {
        if name.is_empty() || name.contains('=') {
            return Err(SessionError::Cookie(format!("invalid cookie name: {name:?}")));
        }
        Self::check_token("cookie name", name)?;
        Self::check_token("cookie value", value)?;

        let max_age_delta = TimeDelta::from_std(max_age)
            .map_err(|e| SessionError::Cookie(format!("max-age out of range: {e}")))?;

        let cookie = Cookie {
            name: name.to_string(),
            value: value.to_string(),
            path: path.to_string(),
            max_age,
            expires_at: Utc::now() + max_age_delta,
        };

        tracing::debug!(name = %name, path = %path, max_age_secs = max_age.as_secs(), "Cookie set");

        let mut cookies = self.cookies.write().await;
        cookies.insert(name.to_string(), cookie);

        Ok(())
    }

    async fn remove_cookie(&self, name: &str) -> Result<(), SessionError> {
        if self.cookies.write().await.remove(name).is_some() {
            tracing::debug!(name = %name, "Cookie removed");
        }
        Ok(())
    }
}
