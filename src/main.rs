#![warn(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use pressroom_mcp::Config;
use pressroom_mcp::app::dispatch;
use pressroom_mcp::cli::Cli;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // stdout carries the MCP protocol; logs go to stderr.
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.log.tracing_level()?
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    dispatch(cli, config).await
}
