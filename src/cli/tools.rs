//! tools CLI subcommand

use crate::mcp::tools::twosplit;
use crate::Result;
use serde_json::json;

/// Print the `tools/list` result
pub fn run() -> Result<()> {
    let listing = json!({ "tools": [twosplit::definition().to_json()] });
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
