//! Router construction.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::handlers::{flashcards, health};
use super::middleware::log_request;
use super::state::SharedState;

/// Build the complete router with all REST routes.
///
/// Request bodies are not size-limited; passages may be arbitrarily long.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/generate-flashcards",
            post(flashcards::generate_flashcards),
        )
        .fallback(health::not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(axum::middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
