use super::prompts;
use super::CompletionBackend;
use crate::models::{BackendError, CompletionPair, ModelId, SynthesisResult, ToolResponse};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Output budget for every backend call
pub const MAX_TOKENS: u32 = 1024;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Fans a prompt out to two completions, then asks the model to merge them
pub struct TwosplitOrchestrator {
    backend: Arc<dyn CompletionBackend>,
    request_timeout: Duration,
}

impl TwosplitOrchestrator {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Run the full two-then-one flow for `prompt`.
    ///
    /// Fails on the first backend error; the synthesis call is never made if
    /// either candidate call fails.
    pub async fn synthesize(
        &self,
        prompt: &str,
        model: ModelId,
    ) -> Result<ToolResponse, BackendError> {
        let enhanced = prompts::enhanced_prompt(prompt);
        let outputs = self.complete_pair(&enhanced, model).await?;
        tracing::debug!(
            model = %model,
            first_len = outputs.first.len(),
            second_len = outputs.second.len(),
            "Candidate completions received"
        );

        let synthesis_prompt = prompts::synthesis_prompt(prompt, &outputs.first, &outputs.second);
        let merged = complete_text(
            self.backend.as_ref(),
            model,
            &synthesis_prompt,
            self.request_timeout,
        )
        .await?;

        let synthesis = SynthesisResult::parse(&merged);
        if !synthesis.is_well_formed() {
            tracing::warn!(
                model = %model,
                "Synthesis output has no '---' delimiter, using whole text as the answer"
            );
        }

        Ok(ToolResponse::new(synthesis, outputs))
    }

    /// Issue the two candidate calls concurrently.
    ///
    /// Results are kept by call position. Returning early drops the join set,
    /// which aborts whichever call is still running.
    async fn complete_pair(
        &self,
        prompt: &str,
        model: ModelId,
    ) -> Result<CompletionPair, BackendError> {
        let mut calls = JoinSet::new();
        for position in 0..2usize {
            let backend = Arc::clone(&self.backend);
            let prompt = prompt.to_string();
            let timeout = self.request_timeout;
            calls.spawn(async move {
                let result = complete_text(backend.as_ref(), model, &prompt, timeout).await;
                (position, result)
            });
        }

        let mut texts: [Option<String>; 2] = [None, None];
        while let Some(joined) = calls.join_next().await {
            let (position, result) = joined.map_err(|e| BackendError::Task(e.to_string()))?;
            match result {
                Ok(text) => texts[position] = Some(text),
                Err(e) => {
                    tracing::warn!(position = position + 1, error = %e, "Candidate completion failed");
                    return Err(e);
                }
            }
        }

        match texts {
            [Some(first), Some(second)] => Ok(CompletionPair { first, second }),
            _ => Err(BackendError::Task(
                "candidate completion finished without a result".to_string(),
            )),
        }
    }
}

/// One bounded backend call, reduced to its text
async fn complete_text(
    backend: &dyn CompletionBackend,
    model: ModelId,
    prompt: &str,
    timeout: Duration,
) -> Result<String, BackendError> {
    match tokio::time::timeout(timeout, backend.complete(model, prompt, MAX_TOKENS)).await {
        Ok(completion) => Ok(completion?.text()),
        Err(_) => Err(BackendError::Timeout(timeout)),
    }
}
