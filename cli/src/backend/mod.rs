//! How the client reaches the relation service.
//!
//! - **RemoteBackend**: `POST {url}/relation` over HTTP (default).
//! - **LocalBackend**: run [`RelationService`](relation::RelationService) in-process.
//!
//! The wizard and the `relate` command only see [`RelationBackend`].

mod local;
mod remote;

pub use local::LocalBackend;
pub use remote::RemoteBackend;

use async_trait::async_trait;
use relation::{RelationRequest, RelationResponse};

/// The request never produced a usable response body.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unreadable response body: {0}")]
    Decode(String),
}

#[async_trait]
pub trait RelationBackend: Send + Sync {
    /// Sends one request. Any body the service returns, whatever its status, is `Ok`.
    async fn relate(&self, req: &RelationRequest) -> Result<RelationResponse, BackendError>;
}
