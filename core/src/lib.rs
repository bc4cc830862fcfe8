//! Flashcard generation from free text.
//!
//! Text is split into word chunks, each chunk is scored for importance, and
//! one completion request per chunk asks an LLM for that many Q/A pairs.
//! All chunk requests run concurrently and the cards come back in chunk order.

pub mod ai;
pub mod chunk;
pub mod config;
pub mod generate;
pub mod importance;
pub mod models;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "server")]
pub mod server;

pub use generate::FlashcardGenerator;
pub use models::{Flashcard, FlashcardRequest, FlashcardResponse};
