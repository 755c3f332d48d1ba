//! twosplit MCP Tool
//!
//! Asks the selected model the same question twice, then has it merge the two
//! answers and attribute which parts came from where.

use super::{coerce_to_string, ToolDefinition};
use crate::models::{ModelId, TwosplitError};
use crate::orchestrator::TwosplitOrchestrator;
use serde_json::{json, Value};

pub const TOOL_NAME: &str = "twosplit";

/// Get the tool definition for twosplit
pub fn definition() -> ToolDefinition {
    let models: Vec<&str> = ModelId::ALL.iter().map(ModelId::as_str).collect();
    ToolDefinition {
        name: TOOL_NAME.to_string(),
        description: "Get multiple AI perspectives and combine them into the best response"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "The prompt to send to the AI"
                },
                "model": {
                    "type": "string",
                    "description": format!("The Claude model to use ({})", ModelId::allowed_list()),
                    "enum": models
                }
            },
            "required": ["prompt", "model"]
        }),
    }
}

/// Validated arguments of a twosplit call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequest {
    pub prompt: String,
    pub model: ModelId,
}

impl ToolRequest {
    /// Validate a prompt and model name. Whitespace-only values count as missing.
    pub fn new(prompt: impl Into<String>, model: &str) -> Result<Self, TwosplitError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() || model.trim().is_empty() {
            return Err(TwosplitError::Validation(
                "Prompt and model are required".to_string(),
            ));
        }

        Ok(Self {
            model: model.parse()?,
            prompt,
        })
    }

    pub fn from_args(args: &Value) -> Result<Self, TwosplitError> {
        let prompt = coerce_to_string(args, "prompt");
        let model = coerce_to_string(args, "model");
        Self::new(prompt, &model)
    }
}

/// Execute the twosplit tool
pub async fn execute(
    args: &Value,
    orchestrator: &TwosplitOrchestrator,
) -> Result<String, TwosplitError> {
    let request = ToolRequest::from_args(args)?;
    tracing::info!(
        model = %request.model,
        prompt_len = request.prompt.len(),
        "Running twosplit"
    );

    let response = orchestrator
        .synthesize(&request.prompt, request.model)
        .await?;
    Ok(response.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BackendError, Completion};
    use crate::orchestrator::CompletionBackend;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingBackend {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl CompletionBackend for CountingBackend {
        async fn complete(
            &self,
            _model: ModelId,
            _prompt: &str,
            _max_tokens: u32,
        ) -> Result<Completion, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(BackendError::Authentication("invalid x-api-key".to_string()));
            }
            Ok(Completion::from_text("ok\n---\nSOURCES:\nboth"))
        }
    }

    fn orchestrator(backend: &Arc<CountingBackend>) -> TwosplitOrchestrator {
        TwosplitOrchestrator::new(backend.clone())
    }

    #[test]
    fn test_definition_schema() {
        let def = definition();
        assert_eq!(def.name, "twosplit");
        assert_eq!(def.input_schema["required"], json!(["prompt", "model"]));
        assert_eq!(
            def.input_schema["properties"]["model"]["enum"],
            json!([
                "claude-3-opus-latest",
                "claude-3-5-sonnet-latest",
                "claude-3-5-haiku-latest",
                "claude-3-haiku-20240307"
            ])
        );
        assert_eq!(def.input_schema["properties"]["prompt"]["type"], "string");
    }

    #[test]
    fn test_request_validation() {
        let missing = ToolRequest::from_args(&json!({"model": "claude-3-opus-latest"}));
        assert_eq!(missing.unwrap_err().to_string(), "Prompt and model are required");

        let blank = ToolRequest::from_args(&json!({"prompt": "  ", "model": "claude-3-opus-latest"}));
        assert!(matches!(blank, Err(TwosplitError::Validation(_))));

        let no_model = ToolRequest::from_args(&json!({"prompt": "hi"}));
        assert!(matches!(no_model, Err(TwosplitError::Validation(_))));

        let bad_model = ToolRequest::from_args(&json!({"prompt": "hi", "model": "gpt-4"}));
        let message = bad_model.unwrap_err().to_string();
        assert!(message.contains(&ModelId::allowed_list()));

        let ok = ToolRequest::from_args(&json!({"prompt": 7, "model": "claude-3-5-haiku-latest"}))
            .unwrap();
        assert_eq!(ok.prompt, "7");
        assert_eq!(ok.model, ModelId::Claude35HaikuLatest);
    }

    #[test]
    fn test_new_matches_from_args() {
        let blank = ToolRequest::new("\n ", "claude-3-opus-latest").unwrap_err();
        assert_eq!(
            blank.to_string(),
            ToolRequest::from_args(&json!({"prompt": "\n ", "model": "claude-3-opus-latest"}))
                .unwrap_err()
                .to_string()
        );

        let ok = ToolRequest::new("hi", ModelId::Claude3OpusLatest.as_str()).unwrap();
        assert_eq!(
            ok,
            ToolRequest::from_args(&json!({"prompt": "hi", "model": "claude-3-opus-latest"}))
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_validation_makes_no_backend_call() {
        let backend = Arc::new(CountingBackend::default());
        let err = execute(&json!({"prompt": "hi", "model": "nope"}), &orchestrator(&backend))
            .await
            .unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_execute_returns_artifact() {
        let backend = Arc::new(CountingBackend::default());
        let text = execute(
            &json!({"prompt": "hi", "model": "claude-3-opus-latest"}),
            &orchestrator(&backend),
        )
        .await
        .unwrap();

        assert_eq!(backend.calls.load(Ordering::SeqCst), 3);
        assert!(text.starts_with("ok\n\n=== AI 1 Output ===\n"));
        assert!(text.ends_with("=== Source Attribution ===\nSOURCES:\nboth"));
    }

    #[tokio::test]
    async fn test_backend_error_is_prefixed() {
        let backend = Arc::new(CountingBackend {
            fail: true,
            ..CountingBackend::default()
        });
        let err = execute(
            &json!({"prompt": "hi", "model": "claude-3-opus-latest"}),
            &orchestrator(&backend),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Anthropic API error: Authentication failed: invalid x-api-key"
        );
        assert!(backend.calls.load(Ordering::SeqCst) <= 2);
    }
}
