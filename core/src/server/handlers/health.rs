use axum::http::Uri;
use axum::Json;
use serde::Serialize;

use crate::server::error::ApiError;

#[derive(Serialize)]
pub(in crate::server) struct HealthResponse {
    ok: bool,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
