//! Drives a form from collected input to a printed outcome.

use authform_core::domain::Field;
use authform_core::{FormError, LoginForm, RegisterForm, SubmitOutcome, ValidationResult};
use authform_shared::FieldDescriptor;

use crate::prompt::Prompter;

/// How many times an interactive user may correct invalid input.
const MAX_ATTEMPTS: usize = 3;

/// Either form, as far as the terminal is concerned.
pub enum Form {
    Login(LoginForm),
    Register(RegisterForm),
}

impl Form {
    fn update_field(&self, field: Field, value: String) -> Result<(), FormError> {
        match self {
            Form::Login(form) => form.update_field(field, value),
            Form::Register(form) => form.update_field(field, value),
        }
    }

    async fn submit(&self) -> SubmitOutcome {
        match self {
            Form::Login(form) => form.submit().await,
            Form::Register(form) => form.submit().await,
        }
    }
}

/// Fill every field (from `provided`, else from `prompter`) and submit.
///
/// When interactive, invalid fields are asked for again. Otherwise nothing
/// is prompted for and missing fields are submitted empty.
pub async fn fill_and_submit(
    form: &Form,
    fields: &[FieldDescriptor],
    provided: impl Fn(&str) -> Option<String>,
    prompter: &mut dyn Prompter,
    interactive: bool,
) -> anyhow::Result<SubmitOutcome> {
    for descriptor in fields {
        let value = match provided(descriptor.name) {
            Some(value) => value,
            None if interactive => prompter.ask(descriptor)?,
            None => String::new(),
        };
        form.update_field(descriptor.name.parse()?, value)?;
    }

    let mut attempt = 1;
    loop {
        let outcome = form.submit().await;
        let SubmitOutcome::Invalid(result) = &outcome else {
            return Ok(outcome);
        };

        print_field_errors(fields, result);
        if !interactive || attempt >= MAX_ATTEMPTS {
            return Ok(outcome);
        }
        attempt += 1;

        for descriptor in fields {
            let field: Field = descriptor.name.parse()?;
            if !result.errors_for(field).is_empty() {
                form.update_field(field, prompter.ask(descriptor)?)?;
            }
        }
    }
}

fn print_field_errors(fields: &[FieldDescriptor], result: &ValidationResult) {
    for descriptor in fields {
        let Ok(field) = descriptor.name.parse::<Field>() else {
            continue;
        };
        if let Some(message) = result.first_message(field) {
            eprintln!("  {}: {}", descriptor.label, message);
        }
    }
}

/// One line per outcome on stdout.
pub fn describe(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::LoggedIn { destination, .. } => {
            format!("Logged in. Continue at {destination}")
        }
        SubmitOutcome::Registered { message } => format!("Registered: {message}"),
        SubmitOutcome::Invalid(_) => "Please correct the highlighted fields.".to_string(),
        SubmitOutcome::MissingToken => {
            "Login accepted, but no session token was returned.".to_string()
        }
        SubmitOutcome::SessionWriteFailed(e) => format!("Login accepted, but {e}"),
        SubmitOutcome::Rejected {
            message,
            status: Some(status),
        } => format!("Rejected ({status}): {message}"),
        SubmitOutcome::Rejected {
            message,
            status: None,
        } => format!("Rejected: {message}"),
        SubmitOutcome::Busy => "A submission is already in progress.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use authform_core::FormSettings;
    use authform_core::domain::{Credentials, RegistrationInput};
    use authform_core::ports::{
        AuthClient, AuthOutcome, LoginSuccess, RegisterSuccess, SessionError, SessionSinks,
    };
    use authform_infra::{InMemoryCookieJar, InMemoryLocalStore, RecordingNavigator, TracingNotifier};
    use authform_shared::{LOGIN_FIELDS, REGISTER_FIELDS};

    use super::*;

    /// Accepts every request.
    #[derive(Default)]
    struct AcceptingAuth {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AuthClient for AcceptingAuth {
        async fn login(&self, _credentials: &Credentials) -> AuthOutcome<LoginSuccess> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            AuthOutcome::Success(LoginSuccess {
                token: Some("T1".to_string()),
                ..LoginSuccess::default()
            })
        }

        async fn register(&self, _input: &RegistrationInput) -> AuthOutcome<RegisterSuccess> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            AuthOutcome::Success(RegisterSuccess {
                message: Some("Created".to_string()),
                data: None,
            })
        }
    }

    /// Answers from a script and records which fields were asked for.
    struct ScriptedPrompter {
        answers: VecDeque<&'static str>,
        asked: Vec<&'static str>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, descriptor: &FieldDescriptor) -> anyhow::Result<String> {
            self.asked.push(descriptor.name);
            match self.answers.pop_front() {
                Some(answer) => Ok(answer.to_string()),
                None => anyhow::bail!("no answer scripted for {}", descriptor.name),
            }
        }
    }

    fn login_form(auth: Arc<AcceptingAuth>) -> Form {
        let sinks = SessionSinks {
            cookies: Arc::new(InMemoryCookieJar::new()),
            store: Arc::new(InMemoryLocalStore::new()),
            navigator: Arc::new(RecordingNavigator::new()),
        };
        Form::Login(LoginForm::new(
            auth,
            Arc::new(TracingNotifier::new()),
            sinks,
            FormSettings::default(),
        ))
    }

    fn register_form(auth: Arc<AcceptingAuth>) -> Form {
        Form::Register(RegisterForm::new(auth, Arc::new(TracingNotifier::new())))
    }

    fn from_pairs(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[tokio::test]
    async fn test_missing_field_is_prompted_for() {
        let auth = Arc::new(AcceptingAuth::default());
        let form = login_form(auth.clone());
        let mut prompter = ScriptedPrompter::new(&["x"]);

        let outcome = fill_and_submit(
            &form,
            LOGIN_FIELDS,
            from_pairs(&[("email", "a@b.com")]),
            &mut prompter,
            true,
        )
        .await
        .unwrap();

        assert!(matches!(outcome, SubmitOutcome::LoggedIn { .. }));
        assert_eq!(prompter.asked, vec!["password"]);
        assert_eq!(auth.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_only_invalid_fields_are_asked_again() {
        let auth = Arc::new(AcceptingAuth::default());
        let form = register_form(auth.clone());
        let mut prompter = ScriptedPrompter::new(&["alice@example.com"]);

        let outcome = fill_and_submit(
            &form,
            REGISTER_FIELDS,
            from_pairs(&[
                ("username", "alice"),
                ("email", "not-an-email"),
                ("password", "Abcdef1!"),
            ]),
            &mut prompter,
            true,
        )
        .await
        .unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Registered {
                message: "Created".to_string()
            }
        );
        assert_eq!(prompter.asked, vec!["email"]);
    }

    #[tokio::test]
    async fn test_gives_up_after_three_invalid_attempts() {
        let auth = Arc::new(AcceptingAuth::default());
        let form = register_form(auth.clone());
        let mut prompter = ScriptedPrompter::new(&["still-bad", "short", "still-bad", "short"]);

        let outcome = fill_and_submit(
            &form,
            REGISTER_FIELDS,
            from_pairs(&[
                ("username", "alice"),
                ("email", "bad"),
                ("password", "short"),
            ]),
            &mut prompter,
            true,
        )
        .await
        .unwrap();

        let SubmitOutcome::Invalid(result) = outcome else {
            panic!("expected invalid, got {outcome:?}");
        };
        assert!(!result.errors_for(Field::Email).is_empty());
        assert!(!result.errors_for(Field::Password).is_empty());
        assert_eq!(prompter.asked, vec!["email", "password", "email", "password"]);
        assert_eq!(auth.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_interactive_submits_empty_without_prompting() {
        let auth = Arc::new(AcceptingAuth::default());
        let form = login_form(auth.clone());
        let mut prompter = ScriptedPrompter::new(&[]);

        let outcome = fill_and_submit(&form, LOGIN_FIELDS, |_| None, &mut prompter, false)
            .await
            .unwrap();

        let SubmitOutcome::Invalid(result) = outcome else {
            panic!("expected invalid, got {outcome:?}");
        };
        assert!(!result.errors_for(Field::Email).is_empty());
        assert!(!result.errors_for(Field::Password).is_empty());
        assert!(prompter.asked.is_empty());
        assert_eq!(auth.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_describe_outcomes() {
        assert_eq!(
            describe(&SubmitOutcome::LoggedIn {
                token: "T1".to_string(),
                destination: "/dashboard".to_string(),
            }),
            "Logged in. Continue at /dashboard"
        );
        assert_eq!(
            describe(&SubmitOutcome::Rejected {
                message: "bad creds".to_string(),
                status: Some(401),
            }),
            "Rejected (401): bad creds"
        );
        assert_eq!(
            describe(&SubmitOutcome::SessionWriteFailed(SessionError::Storage(
                "disk full".to_string()
            ))),
            "Login accepted, but Storage write failed: disk full"
        );
    }

    #[test]
    fn test_describe_never_leaks_token() {
        let line = describe(&SubmitOutcome::LoggedIn {
            token: "secret-token".to_string(),
            destination: "/dashboard".to_string(),
        });
        assert!(!line.contains("secret-token"));
    }
}
