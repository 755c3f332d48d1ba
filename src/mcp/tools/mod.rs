//! MCP Tool Registry and Implementations
//!
//! The server exposes a single tool, `twosplit`. The registry keeps the same
//! definition/execute split per tool so listing and dispatch stay in one place.

pub mod twosplit;

use crate::models::TwosplitError;
use crate::orchestrator::TwosplitOrchestrator;
use serde_json::{json, Value};
use std::sync::Arc;

/// Registry of available MCP tools
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
    orchestrator: Arc<TwosplitOrchestrator>,
}

/// Tool definition for MCP protocol
#[derive(Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl ToolDefinition {
    /// MCP wire form of the definition
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema
        })
    }
}

impl ToolRegistry {
    pub fn new(orchestrator: Arc<TwosplitOrchestrator>) -> Self {
        Self {
            tools: vec![twosplit::definition()],
            orchestrator,
        }
    }

    /// List all available tools in MCP format
    pub fn list_tools(&self) -> Vec<Value> {
        self.tools.iter().map(ToolDefinition::to_json).collect()
    }

    /// Call a tool by name with the given arguments
    pub async fn call_tool(&self, name: &str, arguments: &Value) -> Result<String, TwosplitError> {
        match name {
            twosplit::TOOL_NAME => twosplit::execute(arguments, &self.orchestrator).await,
            _ => Err(TwosplitError::UnknownTool(name.to_string())),
        }
    }
}

/// Read an argument as text.
///
/// Strings pass through, other scalars use their JSON rendering, and a missing
/// or null field reads as empty.
pub fn coerce_to_string(args: &Value, field: &str) -> String {
    match args.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
