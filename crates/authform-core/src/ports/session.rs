//! Client-side session ports - where the token goes after a login.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// Cookie jar abstraction (browser jar, in-memory jar).
#[async_trait]
pub trait CookieJar: Send + Sync {
    /// Set a cookie that expires after `max_age`.
    async fn set_cookie(
        &self,
        name: &str,
        value: &str,
        path: &str,
        max_age: Duration,
    ) -> Result<(), SessionError>;

    /// Drop a cookie. Removing a cookie that is not set is not an error.
    async fn remove_cookie(&self, name: &str) -> Result<(), SessionError>;
}

/// Persistent key-value store that outlives the cookie.
#[async_trait]
pub trait LocalStore: Send + Sync {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;
}

/// Moves the user to another page.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// The three sinks a successful login writes to.
#[derive(Clone)]
pub struct SessionSinks {
    pub cookies: Arc<dyn CookieJar>,
    pub store: Arc<dyn LocalStore>,
    pub navigator: Arc<dyn Navigator>,
}

/// Session store errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Cookie write failed: {0}")]
    Cookie(String),

    #[error("Storage write failed: {0}")]
    Storage(String),
}
