//! Deterministic [`LlmClient`] for tests and offline runs.

use std::sync::Mutex;

use async_trait::async_trait;

use super::LlmClient;
use crate::error::LlmError;

/// Returns the same text (or the same failure) for every prompt and records the prompts.
pub struct MockLlm {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    /// Always answers with `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always fails with [`LlmError::Transport`] carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        if let Ok(mut p) = self.prompts.lock() {
            p.push(prompt.to_string());
        }
        self.reply.clone().map_err(LlmError::Transport)
    }
}
