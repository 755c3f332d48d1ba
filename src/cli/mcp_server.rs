//! serve CLI subcommand
//!
//! Starts the MCP server. The server communicates via JSON-RPC 2.0 over stdio.

use super::build_orchestrator;
use crate::mcp::McpServer;
use crate::models::TwosplitConfig;
use crate::Result;
use std::sync::Arc;

/// Run the MCP server
pub async fn run(config: &TwosplitConfig) -> Result<()> {
    tracing::info!(base_url = %config.backend.base_url, "Twosplit MCP server running on stdio");
    let server = Arc::new(McpServer::new(build_orchestrator(config)));
    server.run().await
}
