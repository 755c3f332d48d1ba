use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use twosplit::{Context, ModelId, Result, TwosplitConfig};

#[derive(Parser)]
#[command(name = "twosplit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MCP server that asks a model twice and merges the answers", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (default: ~/.twosplit/config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server on stdio (default)
    Serve,

    /// Run one twosplit request and print the merged answer
    Ask {
        /// Model to use for all three calls
        #[arg(short, long)]
        model: ModelId,

        /// Prompt to send
        prompt: String,
    },

    /// Print the MCP tool listing as JSON
    Tools,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", format!("Error: Failed to create tokio runtime: {}", e).red());
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "twosplit", &mut io::stdout());
        }

        Commands::Tools => {
            twosplit::cli::tools::run()?;
        }

        Commands::Serve => {
            twosplit::logging::init(&cli.log_level)?;
            let config = load_config(cli.config.as_deref())?;
            twosplit::cli::mcp_server::run(&config).await?;
        }

        Commands::Ask { model, prompt } => {
            twosplit::logging::init(&cli.log_level)?;
            let config = load_config(cli.config.as_deref())?;
            twosplit::cli::ask::run(&config, model, &prompt).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<TwosplitConfig> {
    TwosplitConfig::load(path).context("Invalid configuration")
}
