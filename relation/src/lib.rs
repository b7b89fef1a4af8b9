//! # Relation
//!
//! Turns a set of words into a relationship graph by delegating the inference to a
//! language model and shaping whatever text comes back.
//!
//! ## Flow
//!
//! 1. [`build_prompt`] asks the model for `edges` and `isolated` as JSON only.
//! 2. An [`LlmClient`] (real: [`GeminiClient`], test double: [`MockLlm`]) returns text.
//! 3. [`parse_relation_output`] strips code fences and validates the shape.
//! 4. [`summarize`] renders the parsed [`RelationResult`] as a bullet list.
//!
//! [`RelationService`] ties the steps together and produces a [`RelationResponse`].
//!
//! ## Main modules
//!
//! - [`words`]: [`WordSet`], the ordered, duplicate-free user input.
//! - [`protocol`]: wire types ([`RelationRequest`], [`RelationResponse`]) and body validation.
//! - [`llm`]: [`LlmClient`] trait, [`GeminiClient`], [`MockLlm`].
//! - [`service`]: [`RelationService`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use relation::{MockLlm, RelationResponse, RelationService};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let llm = MockLlm::new(r#"{"edges":[],"isolated":["rock"]}"#);
//! let service = RelationService::new(Arc::new(llm));
//! let words = vec!["rock".to_string()];
//! if let Ok(RelationResponse::Success { summary, .. }) = service.relate(&words).await {
//!     println!("{}", summary);
//! }
//! # }
//! ```

pub mod error;
pub mod llm;
pub mod parse;
pub mod prompt;
pub mod protocol;
pub mod service;
pub mod summary;
pub mod words;

pub use error::{LlmError, RelationError};
pub use llm::{GeminiClient, LlmClient, MockLlm, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use parse::{parse_relation_output, strip_code_fences, ParseError};
pub use prompt::build_prompt;
pub use protocol::{
    extract_words, Edge, InvalidWords, RelationRequest, RelationResponse, RelationResult,
    CLIENT_ERROR_MESSAGE, INTERNAL_ERROR_MESSAGE, INVALID_WORDS_MESSAGE, UNPARSED_OUTPUT_MESSAGE,
};
pub use service::RelationService;
pub use summary::summarize;
pub use words::WordSet;
