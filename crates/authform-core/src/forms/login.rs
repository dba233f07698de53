//! Login form controller.

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use crate::domain::{Credentials, Field};
use crate::error::FormError;
use crate::ports::{
    AuthClient, AuthFailure, AuthOutcome, LoginSuccess, Notifier, SessionError, SessionSinks,
};
use crate::validation::{ValidationResult, validate_login};

use super::{FormSettings, FormState, Submission, SubmitOutcome, lock, non_blank, state_of};

const FORM: &str = "login";

/// Shown when the service rejects a login without saying why.
pub const LOGIN_FAILED_MESSAGE: &str = "Could not log in. Check your credentials.";
pub const MISSING_TOKEN_MESSAGE: &str = "Logged in, but the server did not return a session token.";
pub const SESSION_WRITE_FAILED_MESSAGE: &str = "Logged in, but the session could not be saved.";

/// Controller behind the login form.
pub struct LoginForm {
    auth: Arc<dyn AuthClient>,
    notifier: Arc<dyn Notifier>,
    session: SessionSinks,
    settings: FormSettings,
    input: Mutex<Credentials>,
    errors: Mutex<ValidationResult>,
    submitting: AtomicBool,
}

impl LoginForm {
    pub fn new(
        auth: Arc<dyn AuthClient>,
        notifier: Arc<dyn Notifier>,
        session: SessionSinks,
        settings: FormSettings,
    ) -> Self {
        Self {
            auth,
            notifier,
            session,
            settings,
            input: Mutex::new(Credentials::default()),
            errors: Mutex::new(ValidationResult::new()),
            submitting: AtomicBool::new(false),
        }
    }

    /// Record what the user typed. Validation waits until `submit()`.
    pub fn update_field(&self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        let mut input = lock(&self.input);
        match field {
            Field::Email => input.email = value.into(),
            Field::Password => input.password = value.into(),
            Field::Username => return Err(FormError::UnknownField { form: FORM, field }),
        }
        Ok(())
    }

    pub fn input(&self) -> Credentials {
        lock(&self.input).clone()
    }

    /// Errors from the most recent submission attempt.
    pub fn errors(&self) -> ValidationResult {
        lock(&self.errors).clone()
    }

    pub fn state(&self) -> FormState {
        state_of(&self.submitting)
    }

    pub fn is_submitting(&self) -> bool {
        self.state() == FormState::Submitting
    }

    /// Validate the current input and, if it passes, log in.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_submission) = Submission::begin(&self.submitting) else {
            tracing::debug!(form = FORM, "Submission already in flight, ignoring");
            return SubmitOutcome::Busy;
        };

        let credentials = self.input();
        let result = validate_login(&credentials);
        *lock(&self.errors) = result.clone();
        if !result.is_valid() {
            let invalid: Vec<Field> = result.invalid_fields().collect();
            tracing::debug!(form = FORM, invalid = ?invalid, "Validation failed");
            return SubmitOutcome::Invalid(result);
        }

        tracing::debug!(form = FORM, "Dispatching login request");
        match self.auth.login(&credentials).await {
            AuthOutcome::Success(success) => self.complete(success).await,
            AuthOutcome::Failure(failure) => self.fail(failure),
        }
    }

    async fn complete(&self, success: LoginSuccess) -> SubmitOutcome {
        if let Some(message) = non_blank(success.message) {
            self.notifier.notify_success(&message);
        }

        let Some(token) = success.token.filter(|t| !t.is_empty()) else {
            tracing::warn!(form = FORM, "Login succeeded but no session token was returned");
            self.notifier.notify_error(MISSING_TOKEN_MESSAGE);
            return SubmitOutcome::MissingToken;
        };

        if let Err(e) = self.store_token(&token).await {
            tracing::error!(form = FORM, error = %e, "Failed to store session token");
            self.notifier.notify_error(SESSION_WRITE_FAILED_MESSAGE);
            return SubmitOutcome::SessionWriteFailed(e);
        }

        let destination = self.settings.post_login_path.clone();
        self.session.navigator.navigate(&destination);
        tracing::info!(form = FORM, destination = %destination, "Logged in");

        SubmitOutcome::LoggedIn { token, destination }
    }

    async fn store_token(&self, token: &str) -> Result<(), SessionError> {
        self.session
            .cookies
            .set_cookie(
                &self.settings.cookie_name,
                token,
                &self.settings.cookie_path,
                self.settings.cookie_max_age,
            )
            .await?;

        let Err(e) = self
            .session
            .store
            .set_item(&self.settings.token_key, token)
            .await
        else {
            return Ok(());
        };

        // A cookie without the stored token is a half-written session.
        if let Err(rollback) = self
            .session
            .cookies
            .remove_cookie(&self.settings.cookie_name)
            .await
        {
            tracing::error!(form = FORM, error = %rollback, "Failed to remove session cookie");
        }
        Err(e)
    }

    fn fail(&self, failure: AuthFailure) -> SubmitOutcome {
        tracing::warn!(
            form = FORM,
            status = ?failure.status,
            message = ?failure.message,
            "Login rejected"
        );

        let message = match non_blank(failure.message) {
            Some(message) => {
                self.notifier.notify_error(&message);
                self.notifier.alert(&format!("Error: {message}"));
                message
            }
            None => {
                self.notifier.notify_error(LOGIN_FAILED_MESSAGE);
                self.notifier.alert(LOGIN_FAILED_MESSAGE);
                LOGIN_FAILED_MESSAGE.to_string()
            }
        };

        SubmitOutcome::Rejected {
            message,
            status: failure.status,
        }
    }
}
