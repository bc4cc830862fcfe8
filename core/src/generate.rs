//! Request orchestration: chunk, plan, fan out one generation per chunk, and
//! reassemble the cards in chunk order.

use crate::ai::flashcards::{generate_flashcards, GenerationSettings};
use crate::ai::CompletionProvider;
use crate::chunk::{chunk_text, DEFAULT_WORDS_PER_CHUNK};
use crate::importance::{FlashcardCount, ImportanceScore};
use crate::models::{FlashcardRequest, FlashcardResponse};
use futures::future::join_all;
use log::{debug, info};
use std::sync::Arc;

/// Turns request text into flashcards using a shared completion provider.
#[derive(Clone)]
pub struct FlashcardGenerator {
    provider: Arc<dyn CompletionProvider>,
    settings: GenerationSettings,
    words_per_chunk: usize,
}

impl FlashcardGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            settings: GenerationSettings::default(),
            words_per_chunk: DEFAULT_WORDS_PER_CHUNK,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_words_per_chunk(mut self, words_per_chunk: usize) -> Self {
        self.words_per_chunk = words_per_chunk.max(1);
        self
    }

    pub fn words_per_chunk(&self) -> usize {
        self.words_per_chunk
    }

    /// Generate flashcards for the whole request.
    ///
    /// Every chunk request runs concurrently and all of them complete before
    /// this returns. Chunk failures are already folded into error cards, so
    /// this cannot fail.
    pub async fn generate(&self, request: &FlashcardRequest) -> FlashcardResponse {
        let planned: Vec<_> = chunk_text(&request.text, self.words_per_chunk)
            .map(|chunk| {
                let score = ImportanceScore::of(&chunk.text);
                let count = FlashcardCount::for_score(score);
                debug!(
                    "chunk {}: {} words, score {score}, requesting {count} cards",
                    chunk.index, chunk.word_count
                );
                (chunk, count)
            })
            .collect();

        if planned.is_empty() {
            return FlashcardResponse::default();
        }

        let total: usize = planned.iter().map(|(_, count)| count.get()).sum();
        info!(
            "Generating ~{total} flashcards across {} chunks",
            planned.len()
        );

        let provider = self.provider.as_ref();
        let settings = &self.settings;
        let tasks = planned
            .iter()
            .map(|(chunk, count)| generate_flashcards(provider, settings, chunk, *count));

        // join_all yields results in dispatch order regardless of completion order.
        let flashcards: Vec<_> = join_all(tasks).await.into_iter().flatten().collect();

        info!("Generated {} flashcards", flashcards.len());
        FlashcardResponse { flashcards }
    }
}
