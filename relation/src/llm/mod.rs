//! Model provider abstraction.
//!
//! The relation service only needs "prompt in, text out"; [`LlmClient`] is that
//! capability. It is passed into [`RelationService`](crate::RelationService) as a
//! value so tests can substitute [`MockLlm`] for the real [`GeminiClient`].

mod gemini;
mod mock;

pub use gemini::{GeminiClient, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use mock::MockLlm;

use async_trait::async_trait;

use crate::error::LlmError;

/// Text-completion capability: one prompt, the full generated text.
///
/// Implementations make a single attempt; retries and timeouts are up to the caller.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
