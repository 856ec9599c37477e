//! User input and interaction handling.
//! The `Prompter` trait keeps the resolution and scaffolding logic free of
//! any terminal dependency; tests substitute a scripted implementation.

use std::path::PathBuf;

use dialoguer::{Confirm, Input};

use crate::error::{Error, Result};

/// Interaction surface needed by the scaffolding flow.
pub trait Prompter {
    /// Asks the user for a directory path. Returns `None` when the user
    /// submits an empty answer.
    fn pick_directory(&self, prompt: &str) -> Result<Option<PathBuf>>;

    /// Asks the user a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Dialoguer-based terminal prompter.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn pick_directory(&self, prompt: &str) -> Result<Option<PathBuf>> {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))?;

        let trimmed = input.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(trimmed)))
        }
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
