use serde::{Deserialize, Serialize};

/// Body of `POST /generate-flashcards`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlashcardRequest {
    pub text: String,
}

/// A single question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// All cards for a request, in chunk order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlashcardResponse {
    pub flashcards: Vec<Flashcard>,
}
