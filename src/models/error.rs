//! Error taxonomy for tool invocations, backend calls and startup config

use std::path::PathBuf;
use std::time::Duration;

/// Failure of a single call to the completion backend
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Completion task failed: {0}")]
    Task(String),
}

/// Failure of a `twosplit` tool invocation
#[derive(Debug, thiserror::Error)]
pub enum TwosplitError {
    /// Bad or missing arguments; no backend call was made
    #[error("{0}")]
    Validation(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Anthropic API error: {0}")]
    Backend(#[from] BackendError),
}

impl TwosplitError {
    /// True when the caller sent something wrong, as opposed to the backend failing
    pub fn is_client_error(&self) -> bool {
        matches!(self, TwosplitError::Validation(_) | TwosplitError::UnknownTool(_))
    }
}

/// Startup configuration errors; fatal before any request is served
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ANTHROPIC_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("backend.request_timeout_secs must be greater than 0")]
    ZeroTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_is_prefixed() {
        let err: TwosplitError = BackendError::RateLimited("slow down".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Anthropic API error: Rate limit exceeded: slow down"
        );
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = TwosplitError::Validation("Prompt and model are required".to_string());
        assert_eq!(err.to_string(), "Prompt and model are required");
        assert!(err.is_client_error());
    }
}
