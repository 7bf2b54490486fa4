//! Template environment for jinjalab

use jl_core::{RenderError, RenderResult};
use minijinja::{escape_formatter, AutoEscape, Environment, Error, Output, State, Template, Value};
use std::fmt;
use std::sync::OnceLock;

use crate::error::{compile_error, runtime_error};
use crate::registry::register_filters;

/// Shared engine, built on first use
static SHARED_ENGINE: OnceLock<TemplateEngine> = OnceLock::new();

/// Compiles and renders templates with the custom filters installed.
///
/// Every template is HTML auto-escaped with the markupsafe character set.
/// Block tags swallow the newline after them and the indentation before
/// them. `break`/`continue`, `do` and the common Python string, dict and
/// list methods (`items()`, `split()`, `upper()`, ...) are available.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine with its own environment
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_formatter(markup_formatter);
        env.set_unknown_method_callback(minijinja_contrib::pycompat::unknown_method_callback);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(false);
        register_filters(&mut env);
        Self { env }
    }

    /// The process-wide engine
    pub fn shared() -> &'static TemplateEngine {
        SHARED_ENGINE.get_or_init(TemplateEngine::new)
    }

    /// Compile a template source string
    pub fn compile<'s>(&'s self, source: &'s str) -> RenderResult<Template<'s, 's>> {
        self.env
            .template_from_str(source)
            .map_err(compile_error)
    }

    /// Render a compiled template against a context value
    pub fn render(&self, template: &Template<'_, '_>, ctx: Value) -> RenderResult<String> {
        template.render(ctx).map_err(runtime_error)
    }

    /// Compile and render in one step
    pub fn render_str(&self, source: &str, ctx: Value) -> Result<String, RenderError> {
        let template = self.compile(source)?;
        self.render(&template, ctx)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// HTML-escape `&<>"'` only; `/` passes through unchanged.
fn markup_formatter(out: &mut Output<'_>, state: &State<'_, '_>, value: &Value) -> Result<(), Error> {
    if !matches!(state.auto_escape(), AutoEscape::Html)
        || value.is_safe()
        || value.is_undefined()
        || value.is_none()
    {
        return escape_formatter(out, state, value);
    }
    match value.as_str() {
        Some(text) => write_markup_escaped(out, text)?,
        None => write_markup_escaped(out, &value.to_string())?,
    }
    Ok(())
}

fn write_markup_escaped(out: &mut impl fmt::Write, text: &str) -> fmt::Result {
    let mut last = 0;
    for (idx, byte) in text.bytes().enumerate() {
        let entity = match byte {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&#34;",
            b'\'' => "&#39;",
            _ => continue,
        };
        out.write_str(&text[last..idx])?;
        out.write_str(entity)?;
        last = idx + 1;
    }
    out.write_str(&text[last..])
}

#[cfg(test)]
#[path = "environment_test.rs"]
mod tests;
