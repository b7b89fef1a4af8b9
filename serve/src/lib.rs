//! HTTP server for relation (axum).
//!
//! Routes: `POST /relation` (words → relationship graph), `GET /health`.
//! CORS is open to any origin; there is no authentication.
//!
//! **Public API**: [`router`], [`run_serve`], [`run_serve_on_listener`].

mod app;
mod handlers;
mod response;

use tokio::net::TcpListener;
use tracing::info;

use relation::RelationService;

pub use app::router;

type ServeResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Serves on an already-bound listener until the process is interrupted.
/// Tests bind `127.0.0.1:0` and pass the listener in.
pub async fn run_serve_on_listener(listener: TcpListener, service: RelationService) -> ServeResult {
    let addr = listener.local_addr()?;
    info!("relation server listening on http://{}", addr);
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("relation server stopped");
    Ok(())
}

/// Binds `addr` (e.g. `0.0.0.0:8080`) and serves.
pub async fn run_serve(addr: &str, service: RelationService) -> ServeResult {
    let listener = TcpListener::bind(addr).await?;
    run_serve_on_listener(listener, service).await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; serve until the task is dropped.
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
