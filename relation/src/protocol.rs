//! Wire types for `POST /relation` and validation of the request body.
//!
//! Request: `{"words": ["w1", "w2", ...]}`. Responses are one of three JSON shapes,
//! distinguished by their fields rather than a tag (see [`RelationResponse`]).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a 400 response: `words` missing, not an array, or empty.
pub const INVALID_WORDS_MESSAGE: &str = "Please send words as an array";
/// `error` of the 200 response carrying unparsable model output.
pub const UNPARSED_OUTPUT_MESSAGE: &str = "Could not parse Gemini output";
/// Body of a 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
/// Placeholder the client shows when the service could not be reached at all.
pub const CLIENT_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRequest {
    pub words: Vec<String>,
}

/// Directed, labeled relationship between two input words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub relation: String,
    pub why: String,
}

/// Parsed model output: relationships plus the words related to nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationResult {
    pub edges: Vec<Edge>,
    pub isolated: Vec<String>,
}

/// Response body of `POST /relation`.
///
/// Untagged: variant order matters for deserialization, most specific first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationResponse {
    /// Model output parsed and validated.
    Success { summary: String, data: RelationResult },
    /// Model output was not the expected JSON; `raw` is the fence-stripped text.
    Unparsed { raw: String, error: String },
    /// Validation failure, unexpected server failure, or client-side network failure.
    Error { error: String },
}

impl RelationResponse {
    pub fn unparsed(raw: impl Into<String>) -> Self {
        Self::Unparsed {
            raw: raw.into(),
            error: UNPARSED_OUTPUT_MESSAGE.to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    pub fn invalid_words() -> Self {
        Self::error(INVALID_WORDS_MESSAGE)
    }

    pub fn internal_error() -> Self {
        Self::error(INTERNAL_ERROR_MESSAGE)
    }

    /// The `error` field, if this response carries one.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Unparsed { error, .. } | Self::Error { error } => Some(error),
        }
    }
}

/// Why a request body was rejected. Every variant maps to the same 400 body
/// ([`INVALID_WORDS_MESSAGE`]); the detail is for logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidWords {
    #[error("body is not JSON")]
    NotJson,
    #[error("`words` is missing")]
    Missing,
    #[error("`words` is not an array")]
    NotArray,
    #[error("`words` is empty")]
    Empty,
    #[error("`words` contains a non-string element")]
    NotString,
}

/// Pulls `words` out of a raw request body.
///
/// The body must be a JSON object whose `words` field is a non-empty array of strings.
pub fn extract_words(body: &[u8]) -> Result<Vec<String>, InvalidWords> {
    let value: Value = serde_json::from_slice(body).map_err(|_| InvalidWords::NotJson)?;
    let words = value.get("words").ok_or(InvalidWords::Missing)?;
    let items = words.as_array().ok_or(InvalidWords::NotArray)?;
    if items.is_empty() {
        return Err(InvalidWords::Empty);
    }
    items
        .iter()
        .map(|w| w.as_str().map(String::from).ok_or(InvalidWords::NotString))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_words_accepts_array_of_strings() {
        let words = extract_words(br#"{"words":["dog","cat"]}"#).unwrap();
        assert_eq!(words, vec!["dog", "cat"]);
    }

    #[test]
    fn extract_words_rejects_malformed_bodies() {
        assert_eq!(extract_words(b""), Err(InvalidWords::NotJson));
        assert_eq!(extract_words(b"not json"), Err(InvalidWords::NotJson));
        assert_eq!(extract_words(b"{}"), Err(InvalidWords::Missing));
        assert_eq!(extract_words(b"[1,2]"), Err(InvalidWords::Missing));
        assert_eq!(extract_words(br#"{"words":"dog"}"#), Err(InvalidWords::NotArray));
        assert_eq!(extract_words(br#"{"words":null}"#), Err(InvalidWords::NotArray));
        assert_eq!(extract_words(br#"{"words":[]}"#), Err(InvalidWords::Empty));
        assert_eq!(
            extract_words(br#"{"words":["dog",3]}"#),
            Err(InvalidWords::NotString)
        );
    }

    #[test]
    fn responses_serialize_to_documented_shapes() {
        let ok = RelationResponse::Success {
            summary: "s".into(),
            data: RelationResult::default(),
        };
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"summary": "s", "data": {"edges": [], "isolated": []}})
        );
        assert_eq!(
            serde_json::to_value(RelationResponse::unparsed("oops")).unwrap(),
            json!({"raw": "oops", "error": "Could not parse Gemini output"})
        );
        assert_eq!(
            serde_json::to_value(RelationResponse::invalid_words()).unwrap(),
            json!({"error": "Please send words as an array"})
        );
    }

    #[test]
    fn untagged_deserialization_picks_the_right_variant() {
        let unparsed: RelationResponse =
            serde_json::from_str(r#"{"raw":"x","error":"Could not parse Gemini output"}"#).unwrap();
        assert!(matches!(unparsed, RelationResponse::Unparsed { .. }));

        let err: RelationResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(err.error_message(), Some("boom"));

        let ok: RelationResponse = serde_json::from_str(
            r#"{"summary":"s","data":{"edges":[{"from":"a","to":"b","relation":"r","why":"w"}],"isolated":[]}}"#,
        )
        .unwrap();
        match ok {
            RelationResponse::Success { data, .. } => assert_eq!(data.edges.len(), 1),
            other => panic!("expected success, got {:?}", other),
        }
    }
}
