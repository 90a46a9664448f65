//! Mock session for command handler tests
//!
//! Scripted prompts and in-memory storage; no terminal, no filesystem.

use crate::application::config::AppConfig;
use crate::application::session::{PromptProvider, Session};
use crate::display::Display;
use crate::primitives::ColorChoice;
use crate::storage::{MemoryStorage, Storage};
use anyhow::Result;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted prompt provider
///
/// Answers are consumed front-to-back; an exhausted queue falls back to the
/// caller's default. A non-interactive mock never reaches its queues.
pub struct MockPrompt {
    interactive: bool,
    confirms: Mutex<VecDeque<bool>>,
    texts: Mutex<VecDeque<String>>,
}

impl MockPrompt {
    pub fn interactive() -> Self {
        Self {
            interactive: true,
            confirms: Mutex::new(VecDeque::new()),
            texts: Mutex::new(VecDeque::new()),
        }
    }

    pub fn non_interactive() -> Self {
        Self {
            interactive: false,
            ..Self::interactive()
        }
    }

    pub fn queue_confirm(&self, answer: bool) {
        self.confirms
            .lock()
            .expect("prompt mutex poisoned")
            .push_back(answer);
    }

    pub fn queue_text(&self, answer: &str) {
        self.texts
            .lock()
            .expect("prompt mutex poisoned")
            .push_back(answer.to_string());
    }
}

impl PromptProvider for MockPrompt {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn confirm(&self, _prompt: &str, default: bool) -> Result<bool> {
        Ok(self
            .confirms
            .lock()
            .expect("prompt mutex poisoned")
            .pop_front()
            .unwrap_or(default))
    }

    fn text_input(&self, _prompt: &str, default: Option<String>) -> Result<String> {
        Ok(self
            .texts
            .lock()
            .expect("prompt mutex poisoned")
            .pop_front()
            .or(default)
            .unwrap_or_default())
    }

    fn line_series(&self, _prompt: &str) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        loop {
            let Some(line) = self
                .texts
                .lock()
                .expect("prompt mutex poisoned")
                .pop_front()
            else {
                return Ok(lines);
            };
            if line.trim().is_empty() {
                return Ok(lines);
            }
            lines.push(line.trim().to_string());
        }
    }
}

/// In-memory session for handler tests
pub struct MockSession {
    config: AppConfig,
    storage: MemoryStorage,
    prompt: MockPrompt,
    display: Display,
}

impl MockSession {
    pub fn new() -> Self {
        Self::with_prompt(MockPrompt::non_interactive())
    }

    pub fn with_prompt(prompt: MockPrompt) -> Self {
        Self {
            config: AppConfig::default(),
            storage: MemoryStorage::new(),
            prompt,
            display: Display::new(ColorChoice::Never),
        }
    }

    pub fn prompt_mock(&self) -> &MockPrompt {
        &self.prompt
    }
}

impl Default for MockSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for MockSession {
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
