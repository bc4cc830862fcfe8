use axum::extract::State;
use axum::Json;

use crate::models::{FlashcardRequest, FlashcardResponse};
use crate::server::extractors::JsonBody;
use crate::server::state::SharedState;

/// POST /generate-flashcards
pub async fn generate_flashcards(
    State(state): State<SharedState>,
    JsonBody(request): JsonBody<FlashcardRequest>,
) -> Json<FlashcardResponse> {
    Json(state.generator.generate(&request).await)
}
