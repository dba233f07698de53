//! # Authform CLI
//!
//! Terminal front end for the login and registration forms.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;

use authform_shared::{LOGIN_FIELDS, REGISTER_FIELDS};

mod cli;
mod config;
mod prompt;
mod run;
mod state;
mod telemetry;

use cli::{Cli, Command};
use config::AppConfig;
use prompt::TerminalPrompter;
use run::Form;
use state::AppState;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    telemetry::init_telemetry(&TelemetryConfig::from_env().verbose(cli.verbose));

    let mut config = AppConfig::from_env();
    if let Some(url) = cli.api_url.clone() {
        config.api.base_url = url;
    }

    let state = AppState::new(config)?;
    let interactive = !cli.no_input && std::io::stdin().is_terminal();
    let mut prompter = TerminalPrompter;

    let outcome = match &cli.command {
        Command::Login(args) => {
            let form = Form::Login(state.login_form());
            run::fill_and_submit(
                &form,
                LOGIN_FIELDS,
                |name| args.value(name),
                &mut prompter,
                interactive,
            )
            .await?
        }
        Command::Register(args) => {
            let form = Form::Register(state.register_form());
            run::fill_and_submit(
                &form,
                REGISTER_FIELDS,
                |name| args.value(name),
                &mut prompter,
                interactive,
            )
            .await?
        }
    };

    println!("{}", run::describe(&outcome));

    if let Some(cookie) = state.cookies.get(&state.config.form.cookie_name).await {
        tracing::debug!(name = %cookie.name, expires_at = %cookie.expires_at, "Session cookie set");
    }
    if let Some(path) = state.navigator.last() {
        tracing::debug!(path = %path, "Final destination");
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
