//! Error types for the model provider and the relation service.

/// Failure talking to the model provider.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Request never produced an HTTP response (DNS, connect, TLS, body read).
    #[error("transport: {0}")]
    Transport(String),
    /// Provider answered with a non-success status.
    #[error("provider returned {status}: {body}")]
    Api { status: u16, body: String },
    /// Provider answered 2xx but the payload carried no candidate text.
    #[error("provider returned no text")]
    EmptyResponse,
    /// Provider answered 2xx with a payload we could not decode.
    #[error("decode provider response: {0}")]
    Decode(String),
}

/// Failure producing a relation response. Unparsable model output is not an error;
/// it is the [`RelationResponse::Unparsed`](crate::RelationResponse::Unparsed) variant.
#[derive(Debug, thiserror::Error)]
pub enum RelationError {
    #[error("model provider failed: {0}")]
    Provider(#[from] LlmError),
}
