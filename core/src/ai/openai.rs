//! OpenAI-compatible chat completions client.

use super::{CompletionProvider, CompletionRequest, ProviderError};
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for `POST {base_url}/chat/completions`.
///
/// Wraps a single `reqwest::Client`, which pools connections and is cheap
/// to share across concurrent calls.
#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ProviderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let base_url: String = base_url.into();
        Ok(Self {
            client: builder.build()?,
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        let url = self.endpoint();
        debug!("POST {url} (model={})", request.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: body.trim().to_owned(),
            });
        }

        extract_content(&body)
    }
}

/// Pull the first choice's message content out of a chat completions body.
fn extract_content(body: &str) -> Result<String, ProviderError> {
    let parsed: ChatResponse = serde_json::from_str(body).map_err(|e| {
        ProviderError::Decode(format!(
            "{e}. Body: {}",
            body.chars().take(200).collect::<String>()
        ))
    })?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(ProviderError::EmptyResponse)
}
