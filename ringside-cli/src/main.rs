//! Ringside CLI - Command-line interface
//!
//! Commands:
//! - run: Play the league seasons and the per-weight-class championships

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod run_cmd;

#[derive(Parser)]
#[command(name = "ringside")]
#[command(about = "Boxing league and championship simulator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run seasons, crown the best gym, then one tournament per weight class
    Run(run_cmd::RunArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run(args)) => run_cmd::run(args),
        None => run_cmd::run(run_cmd::RunArgs::default()),
    }
}
