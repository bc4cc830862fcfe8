//! Shared application state for the API server.

use crate::FlashcardGenerator;
use std::sync::Arc;

/// Shared state accessible by all handlers via axum's State extractor.
pub struct AppState {
    pub generator: FlashcardGenerator,
}

pub type SharedState = Arc<AppState>;
