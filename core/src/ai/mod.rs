pub mod flashcards;
pub mod openai;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub use flashcards::{generate_flashcards, parse_flashcards, ERROR_QUESTION};
pub use openai::OpenAiClient;

/// Model requested when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

/// Sampling temperature used for flashcard generation.
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Empty response from provider")]
    EmptyResponse,
    #[error("Failed to decode provider response: {0}")]
    Decode(String),
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_owned(),
            content: content.into(),
        }
    }
}

/// Everything a provider needs to produce one completion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
}

/// A text-generation backend.
///
/// One instance is shared by every in-flight chunk of every request, so
/// implementations must be safe to call concurrently.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run a completion and return the raw text of the first choice.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError>;
}
