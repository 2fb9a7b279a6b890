//! Binary crate for the `skycast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive prompt loop and configuration
//! - Terminal rendering of the forecast view

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod terminal;

fn init_tracing() {
    // Quiet by default; RUST_LOG=skycast_core=debug shows requests.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
