//! RemoteBackend: talk to `relation serve` over HTTP.

use async_trait::async_trait;
use relation::{RelationRequest, RelationResponse};

use super::{BackendError, RelationBackend};

pub struct RemoteBackend {
    base_url: String,
    http: reqwest::Client,
}

impl RemoteBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn with_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/relation", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl RelationBackend for RemoteBackend {
    async fn relate(&self, req: &RelationRequest) -> Result<RelationResponse, BackendError> {
        let url = self.endpoint();
        tracing::debug!(%url, words = req.words.len(), "sending relation request");
        let res = self
            .http
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        let status = res.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "relation service returned an error status");
        }
        res.json::<RelationResponse>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}
