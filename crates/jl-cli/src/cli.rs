//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use jl_core::RenderMode;
use std::path::PathBuf;

/// jinjalab - render Jinja templates against JSON input
#[derive(Parser, Debug)]
#[command(name = "jl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Server config file (default: ./jinjalab.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP render service
    Serve(ServeArgs),

    /// Render a template file against a JSON file
    Render(RenderArgs),

    /// Show the filter documentation catalog
    Filters(FiltersArgs),

    /// Show the example catalog
    Examples(ExamplesArgs),
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind (overrides config)
    #[arg(long, env = "JL_HOST")]
    pub host: Option<String>,

    /// Port to bind (overrides config)
    #[arg(long, env = "JL_PORT")]
    pub port: Option<u16>,
}

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Template file
    #[arg(short, long)]
    pub template: PathBuf,

    /// JSON input file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Render mode
    #[arg(short, long, value_enum, default_value = "render")]
    pub mode: ModeArg,

    /// Pretty-print the response envelope
    #[arg(long)]
    pub pretty: bool,
}

/// Render modes accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Render once with the document bound to `input_json`
    Render,
    /// Render once per entity of a list
    Entity,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Render => RenderMode::Render,
            ModeArg::Entity => RenderMode::Entity,
        }
    }
}

/// Arguments for the filters command
#[derive(Args, Debug)]
pub struct FiltersArgs {
    /// Show a single filter
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: CatalogOutput,
}

/// Arguments for the examples command
#[derive(Args, Debug)]
pub struct ExamplesArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: CatalogOutput,
}

/// Catalog output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOutput {
    /// Human-readable listing
    Text,
    /// JSON, as served over HTTP
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
