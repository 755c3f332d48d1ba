//! ask CLI subcommand
//!
//! Runs one twosplit invocation outside of MCP and prints the result.

use super::build_orchestrator;
use crate::mcp::tools::twosplit::ToolRequest;
use crate::models::{ModelId, TwosplitConfig, TwosplitError};
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub async fn run(config: &TwosplitConfig, model: ModelId, prompt: &str) -> Result<()> {
    let request = ToolRequest::new(prompt, model.as_str())?;
    let orchestrator = build_orchestrator(config);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")?
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    spinner.set_message(format!("Asking {} twice...", request.model));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = orchestrator.synthesize(&request.prompt, request.model).await;
    spinner.finish_and_clear();

    let response = result.map_err(TwosplitError::from)?;
    println!("{}", response);
    Ok(())
}
