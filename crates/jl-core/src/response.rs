//! Render response envelope shared by the HTTP API and the CLI.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Outcome marker carried in every response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// One rendered entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRender {
    /// The entity's identifier, echoed as given
    pub entity: serde_json::Value,
    /// Rendered template text
    pub render: String,
}

/// Successful rendering result
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutput {
    /// `render` mode
    Single(String),
    /// `entity` mode, in input order
    Entities(Vec<EntityRender>),
}

/// Response body for `POST /render`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderResponse {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renders: Option<Vec<EntityRender>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineno: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colno: Option<usize>,
}

impl RenderResponse {
    /// Build a success envelope
    pub fn success(output: RenderOutput) -> Self {
        let (render, renders) = match output {
            RenderOutput::Single(text) => (Some(text), None),
            RenderOutput::Entities(items) => (None, Some(items)),
        };
        Self {
            status: Status::Success,
            render,
            renders,
            message: None,
            lineno: None,
            colno: None,
        }
    }

    /// Build an error envelope
    pub fn error(err: &RenderError) -> Self {
        Self {
            status: Status::Error,
            render: None,
            renders: None,
            message: Some(err.to_string()),
            lineno: err.lineno(),
            colno: err.colno(),
        }
    }

    /// Whether this is a success envelope
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// HTTP status code for this envelope
    pub fn status_code(&self) -> u16 {
        match self.status {
            Status::Success => 200,
            Status::Error => 400,
        }
    }
}

impl From<Result<RenderOutput, RenderError>> for RenderResponse {
    fn from(result: Result<RenderOutput, RenderError>) -> Self {
        match result {
            Ok(output) => RenderResponse::success(output),
            Err(err) => RenderResponse::error(&err),
        }
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod tests;
