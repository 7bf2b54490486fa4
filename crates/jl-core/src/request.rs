//! Render request model.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{RenderError, RenderResult};

/// Identifier field each entity-mode element must carry
pub const ENTITY_FIELD: &str = "Entity";

/// Nested-result field each entity-mode element must carry
pub const ENTITY_RESULT_FIELD: &str = "EntityResult";

/// How the input document is fed to the template
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RenderMode {
    /// Render once with the document bound to `input_json`
    #[default]
    Render,
    /// Render once per entity, with its result object as the context
    Entity,
    /// Any other mode string; rejected when the request is executed
    Unknown(String),
}

impl From<String> for RenderMode {
    fn from(mode: String) -> Self {
        match mode.as_str() {
            "render" => RenderMode::Render,
            "entity" => RenderMode::Entity,
            _ => RenderMode::Unknown(mode),
        }
    }
}

impl From<RenderMode> for String {
    fn from(mode: RenderMode) -> Self {
        mode.to_string()
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Render => write!(f, "render"),
            RenderMode::Entity => write!(f, "entity"),
            RenderMode::Unknown(mode) => write!(f, "{}", mode),
        }
    }
}

/// Body of `POST /render`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Template source
    pub template: String,

    /// JSON-encoded input document
    #[serde(rename = "inputJson")]
    pub input_json: String,

    /// Render mode, `render` when omitted
    #[serde(default, deserialize_with = "mode_or_null")]
    pub mode: RenderMode,

    /// Auxiliary context; accepted for compatibility, not used when rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

/// An explicit `null` mode is kept as the unknown mode `None`
fn mode_or_null<'de, D>(deserializer: D) -> Result<RenderMode, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map_or_else(|| RenderMode::Unknown("None".to_string()), RenderMode::from))
}

impl RenderRequest {
    /// Create a request in `render` mode
    pub fn new(template: impl Into<String>, input_json: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            input_json: input_json.into(),
            mode: RenderMode::Render,
            context: None,
        }
    }

    /// Set the render mode
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parse a raw request body
    pub fn from_slice(body: &[u8]) -> RenderResult<Self> {
        serde_json::from_slice(body).map_err(|e| RenderError::RequestMalformed {
            message: e.to_string(),
        })
    }

    /// Decode the `inputJson` document
    pub fn parse_input(&self) -> RenderResult<serde_json::Value> {
        Ok(serde_json::from_str(&self.input_json)?)
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod tests;
