//! Request handlers.
//!
//! The body of `POST /relation` is taken as raw bytes so that a missing
//! content type or malformed JSON gets the same 400 as a bad `words` field.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use relation::{extract_words, RelationResponse};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use super::app::AppState;
use super::response::json_response;

/// `POST /relation`: 400 on invalid words, 200 on success or unparsable model
/// output, 500 when the model provider fails.
pub(crate) async fn relation_handler(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let words = match extract_words(&body) {
        Ok(w) => w,
        Err(e) => {
            warn!(reason = %e, "rejecting relation request");
            return json_response(StatusCode::BAD_REQUEST, RelationResponse::invalid_words());
        }
    };
    info!(word_count = words.len(), "relation request");
    match state.service.relate(&words).await {
        Ok(resp) => json_response(StatusCode::OK, resp),
        Err(e) => {
            error!(error = %e, "relation request failed");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                RelationResponse::internal_error(),
            )
        }
    }
}

/// `GET /health`
pub(crate) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
