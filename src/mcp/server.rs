//! MCP Server implementation using JSON-RPC 2.0 over stdio
//!
//! Implements the minimal MCP protocol:
//! - `initialize` - Return server info and capabilities
//! - `ping` - Liveness check
//! - `tools/list` - Return available tool definitions
//! - `tools/call` - Execute a tool and return result
//!
//! Each request runs on its own task. Responses go through a single writer so
//! output lines never interleave.

use crate::models::TwosplitError;
use crate::orchestrator::TwosplitOrchestrator;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use super::tools::ToolRegistry;

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "twosplit";

/// MCP Server for handling JSON-RPC requests over stdio
pub struct McpServer {
    tool_registry: ToolRegistry,
}

/// JSON-RPC 2.0 Request
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Option<Value>,
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 Error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

// JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

type MethodResult = std::result::Result<Value, (i32, String)>;

impl JsonRpcResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError { code, message }),
        }
    }
}

impl McpServer {
    pub fn new(orchestrator: Arc<TwosplitOrchestrator>) -> Self {
        Self {
            tool_registry: ToolRegistry::new(orchestrator),
        }
    }

    /// Run the MCP server, reading from stdin and writing to stdout
    pub async fn run(self: Arc<Self>) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve line-delimited JSON-RPC from `reader` until end of input.
    ///
    /// In-flight requests are allowed to finish before this returns, including
    /// when reading fails part way through.
    pub async fn serve<R, W>(self: Arc<Self>, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let writer_task = tokio::spawn(async move {
            while let Some(line) = rx.recv().await {
                writer.write_all(line.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            Ok::<(), std::io::Error>(())
        });

        tracing::info!("Server started, waiting for requests...");

        let mut in_flight = JoinSet::new();
        let mut lines = reader.lines();
        let read_result = loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break Ok(()),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read request");
                    break Err(e);
                }
            };

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let server = Arc::clone(&self);
            let tx = tx.clone();
            in_flight.spawn(async move {
                let Some(response) = server.handle_message(&line).await else {
                    return;
                };
                match serde_json::to_string(&response) {
                    Ok(json) => {
                        // Receiver only closes if the writer failed; that error surfaces below
                        let _ = tx.send(json);
                    }
                    Err(e) => tracing::error!(error = %e, "Failed to serialize response"),
                }
            });

            // Reap finished requests so the set does not grow unbounded
            while in_flight.try_join_next().is_some() {}
        };

        // Requests already read still get their responses, even after a read error
        while in_flight.join_next().await.is_some() {}
        drop(tx);
        writer_task.await??;
        read_result?;

        tracing::info!("Server stopped");
        Ok(())
    }

    /// Handle one raw message. Returns `None` for notifications.
    pub async fn handle_message(&self, line: &str) -> Option<JsonRpcResponse> {
        // Parse JSON
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
            }
        };

        let Some(id) = request.id else {
            tracing::debug!(method = %request.method, "Notification received");
            return None;
        };

        // Validate jsonrpc version
        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::failure(
                id,
                INVALID_REQUEST,
                "Invalid JSON-RPC version".to_string(),
            ));
        }

        tracing::debug!(method = %request.method, "Request received");

        // Route to handler
        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(),
            "ping" => Ok(json!({})),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(&request.params).await,
            "shutdown" => {
                tracing::info!("Shutdown requested");
                Ok(json!({}))
            }
            _ => Err((
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            )),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err((code, message)) => JsonRpcResponse::failure(id, code, message),
        })
    }

    /// Handle `initialize` request
    fn handle_initialize(&self) -> MethodResult {
        Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            },
            "capabilities": {
                "tools": {}
            }
        }))
    }

    /// Handle `tools/list` request
    fn handle_tools_list(&self) -> MethodResult {
        let tools = self.tool_registry.list_tools();
        Ok(json!({ "tools": tools }))
    }

    /// Handle `tools/call` request
    async fn handle_tools_call(&self, params: &Option<Value>) -> MethodResult {
        let params = params
            .as_ref()
            .ok_or((INVALID_PARAMS, "Missing params".to_string()))?;

        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or((INVALID_PARAMS, "Missing tool name".to_string()))?;

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        tracing::debug!(tool = name, "Calling tool");

        match self.tool_registry.call_tool(name, &arguments).await {
            Ok(result) => Ok(json!({
                "content": [{
                    "type": "text",
                    "text": result
                }]
            })),
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "Tool call failed");
                Err((error_code(&e), e.to_string()))
            }
        }
    }
}

fn error_code(err: &TwosplitError) -> i32 {
    if err.is_client_error() {
        INVALID_PARAMS
    } else {
        INTERNAL_ERROR
    }
}
