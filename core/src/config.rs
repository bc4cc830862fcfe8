//! Process configuration read from environment variables.

use crate::ai::openai::DEFAULT_BASE_URL;
use crate::ai::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::chunk::DEFAULT_WORDS_PER_CHUNK;
use std::time::Duration;
use thiserror::Error;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "FLASHCARDS_MODEL";
pub const TEMPERATURE_VAR: &str = "FLASHCARDS_TEMPERATURE";
pub const WORDS_PER_CHUNK_VAR: &str = "FLASHCARDS_WORDS_PER_CHUNK";
pub const TIMEOUT_VAR: &str = "FLASHCARDS_REQUEST_TIMEOUT_SECS";

/// Used when no credential is set. Every provider call will then fail and
/// come back as an error card.
pub const PLACEHOLDER_API_KEY: &str = "your-openai-api-key";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}' ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub words_per_chunk: usize,
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            temperature: DEFAULT_TEMPERATURE,
            words_per_chunk: DEFAULT_WORDS_PER_CHUNK,
            request_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unset or blank
    /// variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(key) = get(API_KEY_VAR) {
            config.api_key = key;
        } else {
            log::warn!("{API_KEY_VAR} is not set; provider calls will fail");
        }
        if let Some(url) = get(BASE_URL_VAR) {
            config.base_url = url;
        }
        if let Some(model) = get(MODEL_VAR) {
            config.model = model;
        }
        if let Some(raw) = get(TEMPERATURE_VAR) {
            let temperature: f32 = parse_var(TEMPERATURE_VAR, &raw)?;
            if !temperature.is_finite() {
                return Err(ConfigError::Invalid {
                    var: TEMPERATURE_VAR,
                    value: raw,
                    reason: "must be a finite number".to_owned(),
                });
            }
            config.temperature = temperature;
        }
        if let Some(raw) = get(WORDS_PER_CHUNK_VAR) {
            let words: usize = parse_var(WORDS_PER_CHUNK_VAR, &raw)?;
            if words == 0 {
                return Err(ConfigError::Invalid {
                    var: WORDS_PER_CHUNK_VAR,
                    value: raw,
                    reason: "must be at least 1".to_owned(),
                });
            }
            config.words_per_chunk = words;
        }
        if let Some(raw) = get(TIMEOUT_VAR) {
            let secs: u64 = parse_var(TIMEOUT_VAR, &raw)?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: raw.to_owned(),
        reason: e.to_string(),
    })
}
