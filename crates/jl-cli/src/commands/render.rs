//! Render a template file against a JSON file from the command line

use anyhow::{Context, Result};
use jl_core::{RenderRequest, RenderResponse};
use jl_jinja::render_request;
use std::fs;

use crate::cli::{GlobalArgs, RenderArgs};
use crate::commands::common::{init_logging, ExitCode};

/// Execute the render command
///
/// Prints the same response envelope `POST /render` returns and exits
/// non-zero when the render failed.
pub async fn execute(args: &RenderArgs, global: &GlobalArgs) -> Result<()> {
    init_logging(global.verbose);

    let template = fs::read_to_string(&args.template)
        .with_context(|| format!("Failed to read template {}", args.template.display()))?;
    let input_json = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input {}", args.input.display()))?;

    let request = RenderRequest::new(template, input_json).with_mode(args.mode.into());
    let response = RenderResponse::from(render_request(&request));

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .context("Failed to serialize render response")?;
    println!("{}", output);

    if !response.is_success() {
        log::debug!(
            "Render of {} failed: {}",
            args.template.display(),
            response.message.as_deref().unwrap_or_default()
        );
        return Err(ExitCode(1).into());
    }
    Ok(())
}
