//! Anthropic Messages API backend

use super::CompletionBackend;
use crate::models::{ApiKey, BackendError, BackendSettings, Completion, ModelId};
use async_trait::async_trait;
use serde_json::{json, Value};

pub struct AnthropicBackend {
    api_key: ApiKey,
    settings: BackendSettings,
    client: reqwest::Client,
}

impl AnthropicBackend {
    pub fn new(api_key: ApiKey, settings: BackendSettings) -> Self {
        Self {
            api_key,
            settings,
            client: reqwest::Client::new(),
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.settings.base_url.trim_end_matches('/'))
    }
}

/// Pull `error.message` out of an API error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl CompletionBackend for AnthropicBackend {
    async fn complete(
        &self,
        model: ModelId,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<Completion, BackendError> {
        let payload = json!({
            "model": model.as_str(),
            "max_tokens": max_tokens,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", self.api_key.expose())
            .header("anthropic-version", &self.settings.api_version)
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(&response.text().await.unwrap_or_default());
            return Err(match status.as_u16() {
                401 | 403 => BackendError::Authentication(message),
                429 => BackendError::RateLimited(message),
                code => BackendError::Api {
                    status: code,
                    message,
                },
            });
        }

        response
            .json::<Completion>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }
}
