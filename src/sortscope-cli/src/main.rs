//! Sortscope CLI - Main entry point.
//!
//! Starts the interactive visualizer, or runs `sortscope sort` headlessly.

use anyhow::Result;
use clap::Parser;

use sortscope_cli::cli::{Cli, dispatch_command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dispatch_command(cli).await
}
