//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use jl_core::ServerConfig;
use std::fmt;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Config file picked up from the working directory when `--config` is absent
pub(crate) const DEFAULT_CONFIG_FILE: &str = "jinjalab.yml";

/// Error type carrying a non-zero process exit code.
///
/// Return `Err(ExitCode(N).into())` after the command has already reported
/// its failure on stdout.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command failed with exit code {}", self.0)
    }
}

impl std::error::Error for ExitCode {}

/// Load the server config from `--config`, else `./jinjalab.yml`, else defaults
pub(crate) fn load_config(global: &GlobalArgs) -> Result<ServerConfig> {
    match &global.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                ServerConfig::load(path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))
            } else {
                Ok(ServerConfig::default())
            }
        }
    }
}

/// Initialise `env_logger`: `RUST_LOG` wins, otherwise `debug` when verbose
/// and `info` by default.
pub(crate) fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init();
}
