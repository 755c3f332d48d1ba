pub mod anthropic;
pub mod backend;
pub mod prompts;
pub mod twosplit;

pub use anthropic::AnthropicBackend;
pub use backend::CompletionBackend;
pub use twosplit::{TwosplitOrchestrator, MAX_TOKENS};
