// Twosplit - MCP server that merges two independent model answers
// Ask once, answer twice, keep the best of both

pub mod cli;
pub mod logging;
pub mod mcp;
pub mod models;
pub mod orchestrator;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use mcp::McpServer;
pub use models::{ModelId, ToolResponse, TwosplitConfig, TwosplitError};
pub use orchestrator::{CompletionBackend, TwosplitOrchestrator};
