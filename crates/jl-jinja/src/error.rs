//! Mapping of minijinja failures onto the render error taxonomy

use jl_core::RenderError;
use minijinja::{Error, ErrorKind};
use std::error::Error as _;

/// Build the error a filter raises for bad input.
///
/// Filters never panic on user data; everything surfaces through here and
/// ends up as a `TemplateRuntime` error.
pub fn filter_error(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::InvalidOperation, message.into())
}

/// Classify an error raised while compiling a template
pub fn compile_error(err: Error) -> RenderError {
    let message = describe(&err);
    match err.kind() {
        ErrorKind::SyntaxError => RenderError::TemplateSyntax {
            message,
            line: err.line(),
        },
        _ => RenderError::Template { message },
    }
}

/// Classify an error raised while rendering a compiled template
pub fn runtime_error(err: Error) -> RenderError {
    RenderError::TemplateRuntime {
        message: describe(&err),
    }
}

/// Error text including the chain of causes
fn describe(err: &Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
