//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "authform-cli", version, about = "Log in to or register with the auth service")]
pub struct Cli {
    /// Override AUTH_API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Never prompt; missing fields are submitted empty.
    #[arg(long, global = true)]
    pub no_input: bool,

    /// Debug logging for the authform crates (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session token.
    Login(LoginArgs),
    /// Create a new account.
    Register(RegisterArgs),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
}

impl LoginArgs {
    pub fn value(&self, name: &str) -> Option<String> {
        match name {
            "email" => self.email.clone(),
            "password" => self.password.clone(),
            _ => None,
        }
    }
}

impl RegisterArgs {
    pub fn value(&self, name: &str) -> Option<String> {
        match name {
            "username" => self.username.clone(),
            "email" => self.email.clone(),
            "password" => self.password.clone(),
            _ => None,
        }
    }
}
