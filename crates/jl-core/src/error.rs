//! Error types for jl-core

use thiserror::Error;

/// Core error type for configuration and I/O
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: IO error with file path context
    #[error("[E004] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

impl From<serde_yaml::Error> for CoreError {
    fn from(err: serde_yaml::Error) -> Self {
        CoreError::ConfigParseError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// Every way a render request can fail.
///
/// The display strings are part of the wire contract: clients key off the
/// `Syntax error in jinja2 template` and `Value error in JSON` prefixes to
/// decide which editor a diagnostic points into.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Request body is not an object or lacks `template` / `inputJson`
    #[error("Malformed request: {message}")]
    RequestMalformed { message: String },

    /// Template failed to parse
    #[error("Syntax error in jinja2 template: {message}")]
    TemplateSyntax {
        message: String,
        line: Option<usize>,
    },

    /// Template failed to compile for a reason other than syntax
    #[error("Syntax error in jinja2 template: {message}")]
    Template { message: String },

    /// `inputJson` is not valid JSON
    #[error("Value error in JSON: {message}")]
    JsonDecode {
        message: String,
        line: usize,
        column: usize,
    },

    /// `inputJson` was rejected without a source position
    #[error("Value error in JSON: {message}")]
    JsonValue { message: String },

    /// Entity mode requires a list
    #[error("Input json must be a list in entity mode")]
    InvalidShape,

    /// An entity lacks its identifier or result field
    #[error("'{field}' is missing in one of the entities object")]
    MissingField { field: String },

    /// Failure while executing the template
    #[error("Error rendering the template: {message}")]
    TemplateRuntime { message: String },

    /// Mode is neither `render` nor `entity`
    #[error("Error rendering the template: Unknown mode {mode}")]
    UnknownMode { mode: String },
}

impl RenderError {
    /// HTTP status code reported for this error
    pub fn status_code(&self) -> u16 {
        400
    }

    /// Source line of the failure, when the failing stage reports one
    pub fn lineno(&self) -> Option<usize> {
        match self {
            RenderError::TemplateSyntax { line, .. } => *line,
            RenderError::JsonDecode { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Source column of the failure (JSON decoding only)
    pub fn colno(&self) -> Option<usize> {
        match self {
            RenderError::JsonDecode { column, .. } => Some(*column),
            _ => None,
        }
    }

    /// Short machine-readable name of the error kind, used in logs
    pub fn kind_name(&self) -> &'static str {
        match self {
            RenderError::RequestMalformed { .. } => "RequestMalformed",
            RenderError::TemplateSyntax { .. } => "TemplateSyntaxError",
            RenderError::Template { .. } => "TemplateError",
            RenderError::JsonDecode { .. } => "JSONDecodeError",
            RenderError::JsonValue { .. } => "ValueError",
            RenderError::InvalidShape => "InvalidShape",
            RenderError::MissingField { .. } => "MissingField",
            RenderError::TemplateRuntime { .. } => "TemplateRuntimeError",
            RenderError::UnknownMode { .. } => "UnknownMode",
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            // Positions are 1-based; serde reports column 0 at end of empty input
            Category::Syntax | Category::Eof => RenderError::JsonDecode {
                message: err.to_string(),
                line: err.line().max(1),
                column: err.column().max(1),
            },
            Category::Data | Category::Io => RenderError::JsonValue {
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias for RenderError
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
