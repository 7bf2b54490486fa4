//! The `json2tbl` filter: render JSON as nested HTML tables.
//!
//! Objects and arrays are laid out by two different builders. Objects go
//! through [`ObjectTable`], which supports both build directions and arbitrary
//! table attributes and writes text unescaped. Arrays go through
//! [`ListTable`], which HTML-escapes text and honours only a `class`
//! attribute.

use minijinja::value::{Kwargs, Value};
use minijinja::Error;
use serde_json::{Map, Value as Json};

use super::param;
use crate::error::filter_error;
use crate::value::value_to_json;

/// Where child cells go relative to their key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BuildDirection {
    /// One `<th>key</th><td>value</td>` row per key
    LeftToRight,
    /// A header row of keys over a single row of values
    TopToBottom,
}

impl BuildDirection {
    pub(crate) fn parse(direction: &str) -> Result<Self, Error> {
        match direction {
            "LEFT_TO_RIGHT" => Ok(Self::LeftToRight),
            "TOP_TO_BOTTOM" => Ok(Self::TopToBottom),
            other => Err(filter_error(format!(
                "json2tbl: invalid build direction '{other}', expected \"TOP_TO_BOTTOM\" or \"LEFT_TO_RIGHT\""
            ))),
        }
    }
}

/// Plain text form of a scalar: `True`/`False`/`None` for booleans and null
pub(crate) fn scalar_text(value: &Json) -> String {
    match value {
        Json::Null => "None".to_string(),
        Json::Bool(true) => "True".to_string(),
        Json::Bool(false) => "False".to_string(),
        Json::Number(n) => n.to_string(),
        Json::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Escape `& < > " '` for HTML text and attribute values
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// Keys shared by every element, when the list is at least `min_len` long
/// and consists only of objects with the same key set. Order follows the
/// first element.
fn common_headers(items: &[Json], min_len: usize) -> Option<Vec<&str>> {
    if items.len() < min_len {
        return None;
    }
    let first = items.first()?.as_object()?;
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    for item in items {
        let obj = item.as_object()?;
        if obj.len() != headers.len() || !headers.iter().all(|h| obj.contains_key(*h)) {
            return None;
        }
    }
    Some(headers)
}

/// Table layout for object input
pub(crate) struct ObjectTable {
    direction: BuildDirection,
    opening_tag: String,
}

impl ObjectTable {
    pub(crate) fn new(direction: BuildDirection, attributes: &Map<String, Json>) -> Self {
        let attrs: String = attributes
            .iter()
            .map(|(key, value)| format!(" {key}=\"{}\"", scalar_text(value)))
            .collect();
        Self {
            direction,
            opening_tag: format!("<table{attrs}>"),
        }
    }

    pub(crate) fn convert(&self, object: &Map<String, Json>) -> String {
        let mut out = self.opening_tag.clone();
        match self.direction {
            BuildDirection::TopToBottom => {
                out.push_str(&self.header_row(object.keys().map(String::as_str)));
                out.push_str("<tr>");
                for value in object.values() {
                    out.push_str(&self.cell(value));
                }
                out.push_str("</tr>");
            }
            BuildDirection::LeftToRight => {
                for (key, value) in object {
                    out.push_str(&format!("<tr><th>{key}</th>"));
                    out.push_str(&self.cell(value));
                    out.push_str("</tr>");
                }
            }
        }
        out.push_str("</table>");
        out
    }

    /// A `<td>`; lists of like-keyed objects are clubbed into a sub-table
    fn cell(&self, value: &Json) -> String {
        match value {
            Json::Array(items) => format!("<td>{}</td>", self.club(items)),
            other => format!("<td>{}</td>", self.markup(other)),
        }
    }

    fn club(&self, items: &[Json]) -> String {
        let Some(headers) = common_headers(items, 2) else {
            return self.markup_list(items);
        };
        let mut out = self.opening_tag.clone();
        out.push_str(&self.header_row(headers.iter().copied()));
        for item in items {
            let cells: Vec<String> = headers
                .iter()
                .map(|h| item.get(*h).map(|v| self.markup(v)).unwrap_or_default())
                .collect();
            out.push_str(&format!("<tr><td>{}</td></tr>", cells.join("</td><td>")));
        }
        out.push_str("</table>");
        out
    }

    fn header_row<'a>(&self, headers: impl Iterator<Item = &'a str>) -> String {
        let cells: String = headers.map(|h| format!("<th>{h}</th>")).collect();
        format!("<tr>{cells}</tr>")
    }

    fn markup(&self, value: &Json) -> String {
        match value {
            Json::Object(map) => self.convert(map),
            Json::Array(items) => self.markup_list(items),
            other => scalar_text(other),
        }
    }

    fn markup_list(&self, items: &[Json]) -> String {
        let entries: Vec<String> = items.iter().map(|v| self.markup(v)).collect();
        format!("<ul><li>{}</li></ul>", entries.join("</li><li>"))
    }
}

/// Table layout for array input
pub(crate) struct ListTable {
    opening_tag: String,
}

impl ListTable {
    pub(crate) fn new(class: Option<&str>) -> Self {
        let opening_tag = match class {
            Some(class) => format!("<table class=\"{class}\">"),
            None => "<table border=\"1\">".to_string(),
        };
        Self { opening_tag }
    }

    pub(crate) fn convert(&self, value: &Json) -> String {
        match value {
            Json::String(s) => escape_html(s),
            Json::Object(map) => self.object(map),
            Json::Array(items) => self.list(items),
            other => scalar_text(other),
        }
    }

    fn list(&self, items: &[Json]) -> String {
        if items.is_empty() {
            return String::new();
        }
        let Some(headers) = common_headers(items, 1) else {
            let entries: Vec<String> = items.iter().map(|v| self.convert(v)).collect();
            return format!("<ul><li>{}</li></ul>", entries.join("</li><li>"));
        };

        let mut out = self.opening_tag.clone();
        out.push_str(&format!(
            "<thead><tr><th>{}</th></tr></thead><tbody>",
            headers.join("</th><th>")
        ));
        for item in items {
            let cells: Vec<String> = headers
                .iter()
                .map(|h| item.get(*h).map(|v| self.convert(v)).unwrap_or_default())
                .collect();
            out.push_str(&format!("<tr><td>{}</td></tr>", cells.join("</td><td>")));
        }
        out.push_str("</tbody></table>");
        out
    }

    fn object(&self, map: &Map<String, Json>) -> String {
        if map.is_empty() {
            return String::new();
        }
        let rows: Vec<String> = map
            .iter()
            .map(|(key, value)| {
                format!(
                    "<th>{}</th><td>{}</td>",
                    escape_html(key),
                    self.convert(value)
                )
            })
            .collect();
        format!(
            "{}<tr>{}</tr></table>",
            self.opening_tag,
            rows.join("</tr><tr>")
        )
    }
}

/// Render an object or array as an HTML table.
///
/// Usage: `{{ alert | json2tbl | safe }}`,
/// `{{ alert | json2tbl('TOP_TO_BOTTOM', {'class': 'grid'}) | safe }}`
///
/// Objects accept any table attributes; arrays only use `class`. Anything
/// else renders as an empty string.
pub fn json2tbl(
    value: Value,
    build_direction: Option<&str>,
    table_attributes: Option<Value>,
    kwargs: Kwargs,
) -> Result<String, Error> {
    let direction = param(build_direction, &kwargs, "build_direction")?.unwrap_or("LEFT_TO_RIGHT");
    let attributes = param(table_attributes, &kwargs, "table_attributes")?;
    kwargs.assert_all_used()?;

    let attributes = match attributes {
        Some(attrs) if !attrs.is_none() && !attrs.is_undefined() => {
            Some(value_to_json(&attrs, "json2tbl")?)
        }
        _ => None,
    };

    match value_to_json(&value, "json2tbl")? {
        Json::Object(map) => {
            let direction = BuildDirection::parse(direction)?;
            let attrs = match attributes {
                None => Map::new(),
                Some(Json::Object(attrs)) => attrs,
                Some(_) => {
                    return Err(filter_error(
                        "json2tbl: table_attributes must be a mapping or none",
                    ))
                }
            };
            Ok(ObjectTable::new(direction, &attrs).convert(&map))
        }
        list @ Json::Array(_) => {
            let class = attributes
                .as_ref()
                .and_then(|attrs| attrs.get("class"))
                .map(scalar_text);
            Ok(ListTable::new(class.as_deref()).convert(&list))
        }
        _ => Ok(String::new()),
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
