pub mod ask;
pub mod mcp_server;
pub mod tools;

use crate::models::TwosplitConfig;
use crate::orchestrator::{AnthropicBackend, TwosplitOrchestrator};
use std::sync::Arc;

/// Wire the Anthropic backend into an orchestrator using `config`
pub fn build_orchestrator(config: &TwosplitConfig) -> Arc<TwosplitOrchestrator> {
    let backend = AnthropicBackend::new(config.api_key.clone(), config.backend.clone());
    Arc::new(
        TwosplitOrchestrator::new(Arc::new(backend))
            .with_request_timeout(config.backend.request_timeout()),
    )
}
