//! CLI command implementations

pub(crate) mod catalog;
pub(crate) mod common;
pub(crate) mod render;
pub(crate) mod serve;
