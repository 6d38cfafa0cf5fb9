//! Terminal prompter built on dialoguer

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use is_terminal::IsTerminal;

use crate::domain::ports::Prompter;
use crate::error::{SyncError, SyncResult};

/// Prompts on the terminal; falls back to defaults when stdin is not a tty
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, question: &str, default: &str) -> SyncResult<String> {
        if !std::io::stdin().is_terminal() {
            tracing::warn!(question, default, "stdin is not a terminal; using default");
            return Ok(default.to_string());
        }

        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| SyncError::Prompt(e.to_string()))?;

        let answer = answer.trim();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }
}
