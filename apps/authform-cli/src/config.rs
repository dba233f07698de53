//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use authform_core::FormSettings;
use authform_infra::AuthApiConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: AuthApiConfig,
    pub form: FormSettings,
    /// JSON file backing the local store. In-memory when unset.
    pub store_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = FormSettings::default();

        let form = FormSettings {
            post_login_path: env::var("AUTH_POST_LOGIN_PATH")
                .unwrap_or(defaults.post_login_path.clone()),
            cookie_max_age: env::var("AUTH_COOKIE_MAX_AGE_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cookie_max_age),
            ..defaults
        };

        Self {
            api: AuthApiConfig::from_env(),
            form,
            store_path: env::var("AUTH_STORE_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }
}
