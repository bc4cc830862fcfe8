//! Per-chunk flashcard generation: prompt, completion call, and Q/A parsing.

use super::{CompletionProvider, CompletionRequest, Message, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::chunk::{is_separator, TextChunk};
use crate::importance::FlashcardCount;
use crate::models::Flashcard;
use log::{debug, warn};

/// Question text of the card returned in place of a failed chunk.
pub const ERROR_QUESTION: &str = "Error occurred";

const QUESTION_MARKER: &str = "Q:";
const ANSWER_MARKER: &str = "A:";

/// Model parameters sent with every chunk request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_owned(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Build the instruction asking for `count` Q/A flashcards from `passage`.
pub fn build_prompt(passage: &str, count: FlashcardCount) -> String {
    format!(
        r#"You are a UPSC flashcard generator.
Generate {count} flashcards from the passage below:

"""{passage}"""

Format each as:
Q: Question?
A: Answer."#
    )
}

/// Parse free-form `Q: ... A: ...` output into flashcards.
///
/// Text before the first `Q:` is dropped. Within a card, everything after
/// the first `A:` is the answer, so answers may themselves contain `A:`.
/// A `Q:` inside a question starts a new card.
pub fn parse_flashcards(output: &str) -> Vec<Flashcard> {
    output
        .split(QUESTION_MARKER)
        .skip(1)
        .map(|segment| {
            let segment = segment.trim_matches(is_separator);
            match segment.split_once(ANSWER_MARKER) {
                Some((question, answer)) => Flashcard::new(
                    question.trim_matches(is_separator),
                    answer.trim_matches(is_separator),
                ),
                None => Flashcard::new(segment, ""),
            }
        })
        .collect()
}

/// Generate flashcards for one chunk.
///
/// Never fails: a provider error becomes a single card whose question is
/// [`ERROR_QUESTION`] and whose answer is the error text.
pub async fn generate_flashcards(
    provider: &dyn CompletionProvider,
    settings: &GenerationSettings,
    chunk: &TextChunk,
    count: FlashcardCount,
) -> Vec<Flashcard> {
    let request = CompletionRequest {
        model: settings.model.clone(),
        messages: vec![Message::user(build_prompt(&chunk.text, count))],
        temperature: settings.temperature,
    };

    match provider.complete(&request).await {
        Ok(output) => {
            let cards = parse_flashcards(&output);
            debug!(
                "chunk {}: requested {count} cards, parsed {}",
                chunk.index,
                cards.len()
            );
            cards
        }
        Err(e) => {
            warn!("chunk {}: generation failed: {e}", chunk.index);
            vec![Flashcard::new(ERROR_QUESTION, e.to_string())]
        }
    }
}
