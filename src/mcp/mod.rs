//! MCP (Model Context Protocol) Server for twosplit
//!
//! ## Tools
//! - `twosplit` - Ask a model twice and merge both answers into one

pub mod server;
pub mod tools;

pub use server::McpServer;
