//! Shared helpers for e2e tests. Received bodies are logged with `[e2e] received: ...`.

use std::sync::Arc;

use relation::{MockLlm, RelationService};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

/// Binds a random port and spawns the server with `llm` as provider. Returns the base URL.
pub async fn spawn_server(llm: MockLlm) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = RelationService::new(Arc::new(llm));
    tokio::spawn(serve::run_serve_on_listener(listener, service));
    format!("http://{}", addr)
}

/// POSTs `body` (raw) to `/relation`; returns status and parsed JSON body.
pub async fn post_relation(base: &str, body: &str) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("{}/relation", base))
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap();
    eprintln!("[e2e] received: {} {}", status, text);
    (status, serde_json::from_str(&text).unwrap())
}
