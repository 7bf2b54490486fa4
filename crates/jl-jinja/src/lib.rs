//! jl-jinja - Jinja templating layer for jinjalab
//!
//! This crate compiles and renders untrusted templates against untrusted
//! JSON input. It provides the custom filter set (`map_priority`, `comment`,
//! `json2tbl`, `to_nice_json`, the `regex_*` family, `filter_datetime`,
//! `filter_json`, ...), the registry that installs them into a shared
//! minijinja environment, the static filter documentation and example
//! catalogs, and [`render_request`], which drives a whole request and
//! classifies every failure into a [`jl_core::RenderError`].

pub mod docs;
pub mod environment;
pub mod error;
pub mod examples;
pub mod filters;
pub mod registry;
pub mod render;
pub(crate) mod value;

pub use docs::{filter_catalog, get_filter_by_name, FilterDescriptor, FilterInput};
pub use environment::TemplateEngine;
pub use examples::{example_catalog, Example};
pub use registry::{register_filters, FILTER_NAMES};
pub use render::{handle_payload, render_request, render_with};
