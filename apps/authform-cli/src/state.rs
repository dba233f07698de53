//! Application state - the collaborators every form is wired to.

use std::sync::Arc;

use authform_core::ports::{AuthClient, LocalStore, Notifier, SessionSinks};
use authform_core::{LoginForm, RegisterForm};
use authform_infra::{
    FileLocalStore, HttpAuthClient, HttpClientError, InMemoryCookieJar, InMemoryLocalStore,
    RecordingNavigator, TracingNotifier,
};

use crate::config::AppConfig;

pub struct AppState {
    pub config: AppConfig,
    pub auth: Arc<dyn AuthClient>,
    pub notifier: Arc<dyn Notifier>,
    pub cookies: Arc<InMemoryCookieJar>,
    pub store: Arc<dyn LocalStore>,
    pub navigator: Arc<RecordingNavigator>,
}

impl AppState {
    /// Build the application state with the configured implementations.
    pub fn new(config: AppConfig) -> Result<Self, HttpClientError> {
        let auth: Arc<dyn AuthClient> = Arc::new(HttpAuthClient::new(config.api.clone())?);

        let store: Arc<dyn LocalStore> = match &config.store_path {
            Some(path) => {
                let store = FileLocalStore::new(path);
                tracing::info!(path = %store.path().display(), "Using file-backed local store");
                Arc::new(store)
            }
            None => {
                tracing::debug!("AUTH_STORE_PATH not set. Token will not outlive this process.");
                Arc::new(InMemoryLocalStore::new())
            }
        };

        Ok(Self {
            config,
            auth,
            notifier: Arc::new(TracingNotifier::console()),
            cookies: Arc::new(InMemoryCookieJar::new()),
            store,
            navigator: Arc::new(RecordingNavigator::new()),
        })
    }

    pub fn sinks(&self) -> SessionSinks {
        SessionSinks {
            cookies: self.cookies.clone(),
            store: self.store.clone(),
            navigator: self.navigator.clone(),
        }
    }

    pub fn login_form(&self) -> LoginForm {
        LoginForm::new(
            self.auth.clone(),
            self.notifier.clone(),
            self.sinks(),
            self.config.form.clone(),
        )
    }

    pub fn register_form(&self) -> RegisterForm {
        RegisterForm::new(self.auth.clone(), self.notifier.clone())
    }
}
