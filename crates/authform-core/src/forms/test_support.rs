//! In-process fakes for controller tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::{Credentials, RegistrationInput};
use crate::ports::{
    AuthClient, AuthFailure, AuthOutcome, CookieJar, LocalStore, LoginSuccess, Navigator,
    Notifier, RegisterSuccess, SessionError, SessionSinks,
};

use super::lock;

/// Auth client returning canned outcomes, optionally held until released.
#[derive(Default)]
pub struct ScriptedAuthClient {
    login: Option<AuthOutcome<LoginSuccess>>,
    register: Option<AuthOutcome<RegisterSuccess>>,
    gate: Option<Notify>,
    login_calls: AtomicUsize,
    register_calls: AtomicUsize,
    last_registration: Mutex<Option<RegistrationInput>>,
}

impl ScriptedAuthClient {
    pub fn login_with(outcome: AuthOutcome<LoginSuccess>) -> Self {
        Self {
            login: Some(outcome),
            ..Self::default()
        }
    }

    pub fn register_with(outcome: AuthOutcome<RegisterSuccess>) -> Self {
        Self {
            register: Some(outcome),
            ..Self::default()
        }
    }

    /// Hold every call until [`Self::release`] is called.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Notify::new());
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn last_registration(&self) -> Option<RegistrationInput> {
        lock(&self.last_registration).clone()
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl AuthClient for ScriptedAuthClient {
    async fn login(&self, _credentials: &Credentials) -> AuthOutcome<LoginSuccess> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;
        self.login
            .clone()
            .unwrap_or(AuthOutcome::Failure(AuthFailure::unexpected_shape(None)))
    }

    async fn register(&self, input: &RegistrationInput) -> AuthOutcome<RegisterSuccess> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        *lock(&self.last_registration) = Some(input.clone());
        self.wait_for_gate().await;
        self.register
            .clone()
            .unwrap_or(AuthOutcome::Failure(AuthFailure::unexpected_shape(None)))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        lock(&self.successes).clone()
    }

    pub fn errors(&self) -> Vec<String> {
        lock(&self.errors).clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        lock(&self.alerts).clone()
    }

    pub fn is_silent(&self) -> bool {
        self.successes().is_empty() && self.errors().is_empty() && self.alerts().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        lock(&self.successes).push(message.to_string());
    }

    fn notify_error(&self, message: &str) {
        lock(&self.errors).push(message.to_string());
    }

    fn alert(&self, message: &str) {
        lock(&self.alerts).push(message.to_string());
    }
}

#[derive(Default)]
pub struct MemoryCookies {
    cookies: Mutex<HashMap<String, (String, String, Duration)>>,
}

impl MemoryCookies {
    pub fn get(&self, name: &str) -> Option<(String, String, Duration)> {
        lock(&self.cookies).get(name).cloned()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.cookies).is_empty()
    }
}

#[async_trait]
impl CookieJar for MemoryCookies {
    async fn set_cookie(
        &self,
        name: &str,
        value: &str,
        path: &str,
        max_age: Duration,
    ) -> Result<(), SessionError> {
        lock(&self.cookies).insert(
            name.to_string(),
            (value.to_string(), path.to_string(), max_age),
        );
        Ok(())
    }

    async fn remove_cookie(&self, name: &str) -> Result<(), SessionError> {
        lock(&self.cookies).remove(name);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
    fail: bool,
}

impl MemoryStore {
    pub fn get(&self, key: &str) -> Option<String> {
        lock(&self.items).get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.items).is_empty()
    }
}

#[async_trait]
impl LocalStore for MemoryStore {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        if self.fail {
            return Err(SessionError::Storage("quota exceeded".to_string()));
        }
        lock(&self.items).insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryNavigator {
    paths: Mutex<Vec<String>>,
}

impl MemoryNavigator {
    pub fn paths(&self) -> Vec<String> {
        lock(&self.paths).clone()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, path: &str) {
        lock(&self.paths).push(path.to_string());
    }
}

/// Every collaborator a form needs, kept so tests can inspect them.
pub struct Harness {
    pub notifier: Arc<RecordingNotifier>,
    pub cookies: Arc<MemoryCookies>,
    pub store: Arc<MemoryStore>,
    pub navigator: Arc<MemoryNavigator>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            notifier: Arc::new(RecordingNotifier::default()),
            cookies: Arc::new(MemoryCookies::default()),
            store: Arc::new(MemoryStore::default()),
            navigator: Arc::new(MemoryNavigator::default()),
        }
    }

    pub fn with_failing_store() -> Self {
        Self {
            store: Arc::new(MemoryStore {
                fail: true,
                ..MemoryStore::default()
            }),
            ..Self::new()
        }
    }

    pub fn sinks(&self) -> SessionSinks {
        SessionSinks {
            cookies: self.cookies.clone(),
            store: self.store.clone(),
            navigator: self.navigator.clone(),
        }
    }
}
