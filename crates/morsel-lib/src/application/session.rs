//! Command session architecture
//!
//! Implements the Session-Scoped Dependency Injection Pattern: each command
//! execution creates a session that owns storage access, prompting, and
//! display. Handlers talk to the traits, tests swap in mocks.

use crate::application::config::AppConfig;
use crate::display::Display;
use crate::storage::{FileStorage, Storage, StorageError};
use anyhow::Result;

/// Provider trait for interactive user input operations
pub trait PromptProvider {
    /// Whether a user is attached to answer prompts
    fn is_interactive(&self) -> bool;

    /// Prompt for confirmation (yes/no)
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Prompt for text input with optional default value
    fn text_input(&self, prompt: &str, default: Option<String>) -> Result<String>;

    /// Prompt for multiple lines, ending on an empty entry
    fn line_series(&self, prompt: &str) -> Result<Vec<String>>;
}

/// Session trait that both LiveSession and MockSession implement
pub trait Session {
    /// Application configuration for this session
    fn config(&self) -> &AppConfig;

    /// Persisted state access
    fn storage(&self) -> &dyn Storage;

    /// Interactive prompting
    fn prompt(&self) -> &dyn PromptProvider;

    /// User-facing output
    fn display(&self) -> &Display;
}

/// Live session: file-backed storage, dialoguer prompts
pub struct LiveSession {
    config: AppConfig,
    storage: FileStorage,
    prompt: LivePrompt,
    display: Display,
}

impl LiveSession {
    pub fn new(config: AppConfig) -> Result<Self, StorageError> {
        let root = match &config.data_dir {
            Some(dir) => dir.clone(),
            None => FileStorage::default_root()?,
        };
        let storage = FileStorage::open(root)?;
        let display = Display::new(config.color);

        Ok(Self {
            config,
            storage,
            prompt: LivePrompt,
            display,
        })
    }
}

impl Session for LiveSession {
    fn config(&self) -> &AppConfig {
        &self.config
    }

    fn storage(&self) -> &dyn Storage {
        &self.storage
    }

    fn prompt(&self) -> &dyn PromptProvider {
        &self.prompt
    }

    fn display(&self) -> &Display {
        &self.display
    }
}

/// Terminal prompting via dialoguer
pub struct LivePrompt;

impl PromptProvider for LivePrompt {
    fn is_interactive(&self) -> bool {
        console::user_attended()
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn text_input(&self, prompt: &str, default: Option<String>) -> Result<String> {
        let mut input = dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default);
        }
        Ok(input.interact_text()?)
    }

    fn line_series(&self, prompt: &str) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        loop {
            let line = self.text_input(&format!("{prompt} (empty line to finish)"), None)?;
            let line = line.trim().to_string();
            if line.is_empty() {
                return Ok(lines);
            }
            lines.push(line);
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use super::session_mocks::{MockPrompt, MockSession};
