//! Axum app: shared state and router.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use relation::RelationService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health, relation_handler};

/// Shared state for handlers. The service holds the injected model provider.
pub(crate) struct AppState {
    pub(crate) service: RelationService,
}

/// Builds the router: `POST /relation`, `GET /health`, permissive CORS, request tracing.
pub fn router(service: RelationService) -> Router {
    let state = Arc::new(AppState { service });
    Router::new()
        .route("/relation", post(relation_handler))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
