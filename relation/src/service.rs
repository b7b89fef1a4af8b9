//! [`RelationService`]: prompt → model → parse → summary.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::RelationError;
use crate::llm::LlmClient;
use crate::parse::parse_relation_output;
use crate::prompt::build_prompt;
use crate::protocol::RelationResponse;
use crate::summary::summarize;

/// Stateless relation finder over an injected model provider.
///
/// Cheap to clone; concurrent calls share nothing but the provider handle.
#[derive(Clone)]
pub struct RelationService {
    llm: Arc<dyn LlmClient>,
}

impl RelationService {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Asks the model how `words` relate.
    ///
    /// Returns [`RelationResponse::Success`] when the output parses into the expected
    /// shape and [`RelationResponse::Unparsed`] when it does not. Only a provider
    /// failure is an `Err`. `words` is expected to be non-empty (validated upstream).
    pub async fn relate(&self, words: &[String]) -> Result<RelationResponse, RelationError> {
        let prompt = build_prompt(words);
        debug!(word_count = words.len(), "requesting relations from model");
        let text = self.llm.generate(&prompt).await?;
        match parse_relation_output(&text) {
            Ok(data) => {
                debug!(
                    edges = data.edges.len(),
                    isolated = data.isolated.len(),
                    "model output parsed"
                );
                let summary = summarize(&data);
                Ok(RelationResponse::Success { summary, data })
            }
            Err(e) => {
                warn!(error = %e, "returning raw model output");
                Ok(RelationResponse::unparsed(e.into_raw()))
            }
        }
    }
}
