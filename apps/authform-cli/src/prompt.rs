//! Reading field values from the terminal.

use authform_shared::FieldDescriptor;
use dialoguer::{Input, Password};

/// Source of answers for fields the command line did not provide.
pub trait Prompter {
    fn ask(&mut self, descriptor: &FieldDescriptor) -> anyhow::Result<String>;
}

/// Prompts on the terminal; secret fields are read without echo.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, descriptor: &FieldDescriptor) -> anyhow::Result<String> {
        let prompt = prompt_text(descriptor);

        // Empty answers are let through so the form reports them.
        let answer = if descriptor.input_type.is_secret() {
            Password::new()
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()?
        } else {
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?
        };
        Ok(answer)
    }
}

fn prompt_text(descriptor: &FieldDescriptor) -> String {
    if descriptor.placeholder.is_empty() {
        descriptor.label.to_string()
    } else {
        format!("{} ({})", descriptor.label, descriptor.placeholder)
    }
}
