//! Best-effort parsing of model output into a [`RelationResult`].
//!
//! Models often wrap JSON in markdown fences (```` ```json ... ``` ````); those are
//! stripped before parsing. The parsed value must also have the expected shape:
//! a JSON object that parses but lacks `edges`/`isolated` is rejected the same way
//! as text that is not JSON at all.

use serde_json::Value;

use crate::protocol::RelationResult;

/// Model output that could not be turned into a [`RelationResult`].
/// Carries the fence-stripped text so callers can show what the model produced.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("model output is not JSON: {source}")]
    NotJson {
        raw: String,
        source: serde_json::Error,
    },
    #[error("model output has unexpected shape: {source}")]
    Shape {
        raw: String,
        source: serde_json::Error,
    },
}

impl ParseError {
    pub fn raw(&self) -> &str {
        match self {
            Self::NotJson { raw, .. } | Self::Shape { raw, .. } => raw,
        }
    }

    pub fn into_raw(self) -> String {
        match self {
            Self::NotJson { raw, .. } | Self::Shape { raw, .. } => raw,
        }
    }
}

/// Removes every ```` ```json ```` marker, then every remaining ```` ``` ````, then trims.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Strips fences, parses JSON and validates the `{edges, isolated}` shape.
pub fn parse_relation_output(text: &str) -> Result<RelationResult, ParseError> {
    let cleaned = strip_code_fences(text);
    let value: Value = match serde_json::from_str(&cleaned) {
        Ok(v) => v,
        Err(source) => {
            return Err(ParseError::NotJson {
                raw: cleaned,
                source,
            })
        }
    };
    serde_json::from_value(value).map_err(|source| ParseError::Shape {
        raw: cleaned,
        source,
    })
}
