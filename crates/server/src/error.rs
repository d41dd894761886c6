use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bioskop_core::error::ErrorEnvelope;

/// 404 for a path no route matches. Catalog failures never produce an error
/// response; handlers degrade those to empty results.
pub struct NotFound(pub String);

impl IntoResponse for NotFound {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, Json(ErrorEnvelope::not_found(&self.0))).into_response()
    }
}
