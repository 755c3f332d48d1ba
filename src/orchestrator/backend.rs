use crate::models::{BackendError, Completion, ModelId};
use async_trait::async_trait;

/// A language-model backend able to produce one completion per call.
///
/// Implementations hold no per-request state; the orchestrator calls the same
/// backend concurrently from several tasks.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        model: ModelId,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<Completion, BackendError>;
}
