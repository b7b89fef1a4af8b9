//! Shared helpers for relation integration tests. `RUST_LOG` controls test log output.

use std::sync::Arc;

use relation::{MockLlm, RelationService};
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

#[allow(dead_code)]
pub fn words(ws: &[&str]) -> Vec<String> {
    ws.iter().map(|w| w.to_string()).collect()
}

/// RelationService backed by `llm`.
#[allow(dead_code)]
pub fn service_with(llm: MockLlm) -> RelationService {
    RelationService::new(Arc::new(llm))
}
