//! Registration form controller.

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use crate::domain::{Field, RegistrationInput};
use crate::error::FormError;
use crate::ports::{AuthClient, AuthFailure, AuthOutcome, Notifier, RegisterSuccess};
use crate::validation::{ValidationResult, validate_registration};

use super::{FormState, Submission, SubmitOutcome, lock, non_blank, state_of};

const FORM: &str = "register";

pub const REGISTERED_MESSAGE: &str = "Account created.";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

/// Controller behind the registration form. Creates no session.
pub struct RegisterForm {
    auth: Arc<dyn AuthClient>,
    notifier: Arc<dyn Notifier>,
    input: Mutex<RegistrationInput>,
    errors: Mutex<ValidationResult>,
    submitting: AtomicBool,
}

impl RegisterForm {
    pub fn new(auth: Arc<dyn AuthClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            auth,
            notifier,
            input: Mutex::new(RegistrationInput::default()),
            errors: Mutex::new(ValidationResult::new()),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        let mut input = lock(&self.input);
        let slot = match field {
            Field::Username => &mut input.username,
            Field::Email => &mut input.email,
            Field::Password => &mut input.password,
        };
        *slot = value.into();
        Ok(())
    }

    pub fn input(&self) -> RegistrationInput {
        lock(&self.input).clone()
    }

    pub fn errors(&self) -> ValidationResult {
        lock(&self.errors).clone()
    }

    pub fn state(&self) -> FormState {
        state_of(&self.submitting)
    }

    pub fn is_submitting(&self) -> bool {
        self.state() == FormState::Submitting
    }

    /// Validate the current input and, if it passes, create the account.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_submission) = Submission::begin(&self.submitting) else {
            tracing::debug!(form = FORM, "Submission already in flight, ignoring");
            return SubmitOutcome::Busy;
        };

        let input = self.input();
        let result = validate_registration(&input);
        *lock(&self.errors) = result.clone();
        if !result.is_valid() {
            let invalid: Vec<Field> = result.invalid_fields().collect();
            tracing::debug!(form = FORM, invalid = ?invalid, "Validation failed");
            return SubmitOutcome::Invalid(result);
        }

        tracing::debug!(form = FORM, username = %input.username, "Dispatching registration request");
        match self.auth.register(&input).await {
            AuthOutcome::Success(success) => self.complete(success),
            AuthOutcome::Failure(failure) => self.fail(failure),
        }
    }

    fn complete(&self, success: RegisterSuccess) -> SubmitOutcome {
        let message =
            non_blank(success.message).unwrap_or_else(|| REGISTERED_MESSAGE.to_string());
        self.notifier.notify_success(&message);
        tracing::info!(form = FORM, "Account registered");
        SubmitOutcome::Registered { message }
    }

    fn fail(&self, failure: AuthFailure) -> SubmitOutcome {
        tracing::error!(
            form = FORM,
            status = ?failure.status,
            message = ?failure.message,
            "Registration failed"
        );

        let message =
            non_blank(failure.message).unwrap_or_else(|| REGISTER_FAILED_MESSAGE.to_string());
        self.notifier.notify_error(&message);

        SubmitOutcome::Rejected {
            message,
            status: failure.status,
        }
    }
}
