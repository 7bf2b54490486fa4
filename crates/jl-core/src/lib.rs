//! jl-core - Core library for jinjalab
//!
//! This crate provides the types shared by the rendering engine and the
//! HTTP/CLI boundary: the dotted-path accessor used by the `filter_json`
//! filter, the render request/response model, the error taxonomy, and
//! server configuration parsing.

pub mod config;
pub mod dotpath;
pub mod error;
pub mod request;
pub mod response;

pub use config::ServerConfig;
pub use dotpath::{Attr, DotNode, PathError};
pub use error::{CoreError, CoreResult, RenderError, RenderResult};
pub use request::{RenderMode, RenderRequest, ENTITY_FIELD, ENTITY_RESULT_FIELD};
pub use response::{EntityRender, RenderOutput, RenderResponse, Status};
