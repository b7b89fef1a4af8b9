//! Build an HTTP response from a [`RelationResponse`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use relation::RelationResponse;

pub(crate) fn json_response(status: StatusCode, body: RelationResponse) -> Response {
    (status, Json(body)).into_response()
}
