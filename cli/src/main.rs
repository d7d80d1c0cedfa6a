//! CLI entrypoint for skimmer
//!
//! This is the main binary that wires together all layers using
//! dependency injection: configuration is loaded, the web tool set is
//! constructed from it, and a single tool invocation is executed per
//! run. The agent loop that would normally drive these tools lives in
//! the host application; this binary is the standalone way to exercise
//! them.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use skimmer_application::ToolExecutorPort;
use skimmer_domain::tool::entities::ToolCall;
use skimmer_infrastructure::{ConfigLoader, WebToolExecutor};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "skimmer", version, about = "Web search and page reading tools for autonomous agents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Explicit config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the web and print the formatted results
    Search {
        /// The search query to perform
        query: String,
        /// Override the configured result cap
        #[arg(long)]
        max_results: Option<usize>,
    },
    /// Fetch a webpage and print its readable text
    Fetch {
        /// The url of the webpage to visit
        url: String,
        /// Override the configured output character limit
        #[arg(long)]
        max_length: Option<usize>,
    },
    /// List available tools and their schemas
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to load configuration")?;

    // Per-command overrides
    match &cli.command {
        Commands::Search {
            max_results: Some(n),
            ..
        } => config.search.max_results = *n,
        Commands::Fetch {
            max_length: Some(n),
            ..
        } => config.fetch.max_output_length = *n,
        _ => {}
    }

    if let Some(model) = &config.agent.model {
        info!("configured agent model: {}", model);
    }

    // === Dependency Injection ===
    let executor = WebToolExecutor::from_config(&config)
        .context("Failed to construct the web tool set")?;

    let call = match &cli.command {
        Commands::Search { query, .. } => ToolCall::new("web_search").with_arg("query", query.as_str()),
        Commands::Fetch { url, .. } => ToolCall::new("web_fetch").with_arg("url", url.as_str()),
        Commands::Tools => {
            print_tool_spec(&executor);
            return Ok(());
        }
    };

    let result = executor.execute(&call).await;
    info!(
        "tool '{}' finished in {}ms",
        result.tool_name,
        result.metadata.duration_ms.unwrap_or(0)
    );

    match (result.output(), result.error()) {
        (Some(output), _) => {
            println!("{}", output);
            Ok(())
        }
        (None, Some(error)) => bail!("{}", error),
        (None, None) => bail!("Tool returned neither output nor error"),
    }
}

/// Print the advertised tool catalog in a readable form
fn print_tool_spec(executor: &WebToolExecutor) {
    let mut definitions: Vec<_> = executor.tool_spec().all().collect();
    definitions.sort_by(|a, b| a.name.cmp(&b.name));

    for definition in definitions {
        println!("{} -> {}", definition.name, definition.output_type);
        println!("  {}", definition.description);
        for param in &definition.parameters {
            let required = if param.required { "required" } else { "optional" };
            println!(
                "  - {} ({}, {}): {}",
                param.name, param.param_type, required, param.description
            );
        }
        println!();
    }
}
