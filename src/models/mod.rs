pub mod completion;
pub mod config;
pub mod error;
pub mod model;
pub mod synthesis;

pub use completion::{Completion, CompletionPair, ContentBlock};
pub use config::{ApiKey, BackendSettings, TwosplitConfig};
pub use error::{BackendError, ConfigError, TwosplitError};
pub use model::ModelId;
pub use synthesis::{SynthesisResult, ToolResponse};
