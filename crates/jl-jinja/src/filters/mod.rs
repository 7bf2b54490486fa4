//! Custom template filters.
//!
//! Every filter is a plain function with a minijinja-compatible signature.
//! The piped value is the first argument; optional parameters may be passed
//! positionally or by keyword, so both `x|comment('c')` and
//! `x|comment(style='c')` work.

mod comment;
mod datetime;
mod helpers;
mod json;
mod pattern;
mod table;

pub use comment::comment;
pub use datetime::{filter_datetime, timectime};
pub use helpers::{is_in_list, map_priority, ternary};
pub use json::{filter_json, to_json, to_nice_json};
pub use pattern::{regex_match, regex_replace, regex_search, regex_substring};
pub use table::json2tbl;

use minijinja::value::{ArgType, Kwargs};
use minijinja::Error;

/// Resolve an optional parameter given either positionally or as a keyword
pub(crate) fn param<'a, T>(
    positional: Option<T>,
    kwargs: &'a Kwargs,
    name: &'a str,
) -> Result<Option<T>, Error>
where
    T: ArgType<'a, Output = T>,
{
    match positional {
        Some(value) => Ok(Some(value)),
        None => kwargs.get::<Option<T>>(name),
    }
}

/// Render a template with the custom filters installed and no auto-escaping
#[cfg(test)]
pub(crate) fn render_filtered(source: &str, ctx: serde_json::Value) -> Result<String, Error> {
    let mut env = minijinja::Environment::new();
    crate::registry::register_filters(&mut env);
    env.render_str(source, ctx)
}
