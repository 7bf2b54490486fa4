//! jinjalab CLI - render service and command-line tools for Jinja templates

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{catalog, render, serve};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Serve(args) => serve::execute(args, &cli.global).await,
        cli::Commands::Render(args) => render::execute(args, &cli.global).await,
        cli::Commands::Filters(args) => catalog::execute_filters(args, &cli.global).await,
        cli::Commands::Examples(args) => catalog::execute_examples(args, &cli.global).await,
    }
}
