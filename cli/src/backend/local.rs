//! LocalBackend: run the relation service in-process.

use async_trait::async_trait;
use relation::{RelationRequest, RelationResponse, RelationService};

use super::{BackendError, RelationBackend};

/// Same outcomes as the HTTP server, without the HTTP hop: empty words give the
/// validation error, provider failures give the internal error.
pub struct LocalBackend {
    service: RelationService,
}

impl LocalBackend {
    pub fn new(service: RelationService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RelationBackend for LocalBackend {
    async fn relate(&self, req: &RelationRequest) -> Result<RelationResponse, BackendError> {
        if req.words.is_empty() {
            return Ok(RelationResponse::invalid_words());
        }
        match self.service.relate(&req.words).await {
            Ok(resp) => Ok(resp),
            Err(e) => {
                tracing::error!(error = %e, "local relation request failed");
                Ok(RelationResponse::internal_error())
            }
        }
    }
}
