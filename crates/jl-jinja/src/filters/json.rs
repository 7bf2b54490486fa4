//! JSON filters: `to_json`, `to_nice_json` and `filter_json`.

use std::io::{self, Write};

use jl_core::DotNode;
use minijinja::value::{Kwargs, Value, ValueKind};
use minijinja::Error;
use serde::Serialize;
use serde_json::ser::Formatter;

use crate::error::filter_error;
use crate::value::{json_to_value, value_to_json};

/// Options controlling JSON text output.
///
/// Defaults mirror the conventional `json.dumps` layout: compact but spaced
/// separators on one line, `,` between items once indentation is on, and
/// non-ASCII characters written as `\uXXXX` escapes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DumpOptions {
    pub indent: Option<String>,
    pub sort_keys: bool,
    pub separators: Option<(String, String)>,
    pub ensure_ascii: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            indent: None,
            sort_keys: false,
            separators: None,
            ensure_ascii: true,
        }
    }
}

impl DumpOptions {
    /// Apply keyword overrides on top of `self`
    fn with_kwargs(mut self, kwargs: &Kwargs, filter: &str) -> Result<Self, Error> {
        if let Some(indent) = kwargs.get::<Option<Value>>("indent")? {
            self.indent = indent_string(&indent, filter)?;
        }
        if let Some(sort_keys) = kwargs.get::<Option<bool>>("sort_keys")? {
            self.sort_keys = sort_keys;
        }
        if let Some(ensure_ascii) = kwargs.get::<Option<bool>>("ensure_ascii")? {
            self.ensure_ascii = ensure_ascii;
        }
        if let Some(separators) = kwargs.get::<Option<Value>>("separators")? {
            self.separators = separator_pair(&separators, filter)?;
        }
        kwargs.assert_all_used()?;
        Ok(self)
    }

    fn item_separator(&self) -> &str {
        match (&self.separators, &self.indent) {
            (Some((item, _)), _) => item,
            (None, Some(_)) => ",",
            (None, None) => ", ",
        }
    }

    fn key_separator(&self) -> &str {
        match &self.separators {
            Some((_, key)) => key,
            None => ": ",
        }
    }
}

/// An indent given as a count of spaces or as a literal string; none disables it
fn indent_string(indent: &Value, filter: &str) -> Result<Option<String>, Error> {
    match indent.kind() {
        ValueKind::None | ValueKind::Undefined => Ok(None),
        ValueKind::String => Ok(indent.as_str().map(str::to_string)),
        ValueKind::Number => {
            let width = i64::try_from(indent.clone())
                .map_err(|_| filter_error(format!("{filter}: indent must be an integer")))?;
            Ok(Some(" ".repeat(width.max(0) as usize)))
        }
        _ => Err(filter_error(format!(
            "{filter}: indent must be an integer or a string"
        ))),
    }
}

fn separator_pair(value: &Value, filter: &str) -> Result<Option<(String, String)>, Error> {
    if value.is_none() || value.is_undefined() {
        return Ok(None);
    }
    let invalid = || filter_error(format!("{filter}: separators must be a pair of strings"));
    let parts: Vec<String> = value
        .try_iter()
        .map_err(|_| invalid())?
        .map(|part| part.as_str().map(str::to_string).ok_or_else(invalid))
        .collect::<Result<_, _>>()?;
    match <[String; 2]>::try_from(parts) {
        Ok([item, key]) => Ok(Some((item, key))),
        Err(_) => Err(invalid()),
    }
}

/// serde_json formatter implementing [`DumpOptions`]
struct DumpFormatter<'a> {
    indent: Option<&'a [u8]>,
    item_separator: &'a [u8],
    key_separator: &'a [u8],
    ensure_ascii: bool,
    depth: usize,
    has_value: bool,
}

impl<'a> DumpFormatter<'a> {
    fn new(options: &'a DumpOptions) -> Self {
        Self {
            indent: options.indent.as_deref().map(str::as_bytes),
            item_separator: options.item_separator().as_bytes(),
            key_separator: options.key_separator().as_bytes(),
            ensure_ascii: options.ensure_ascii,
            depth: 0,
            has_value: false,
        }
    }

    fn newline<W: ?Sized + io::Write>(&self, writer: &mut W) -> io::Result<()> {
        if let Some(indent) = self.indent {
            writer.write_all(b"\n")?;
            for _ in 0..self.depth {
                writer.write_all(indent)?;
            }
        }
        Ok(())
    }

    fn open<W: ?Sized + io::Write>(&mut self, writer: &mut W, token: &[u8]) -> io::Result<()> {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(token)
    }

    fn close<W: ?Sized + io::Write>(&mut self, writer: &mut W, token: &[u8]) -> io::Result<()> {
        self.depth -= 1;
        if self.has_value {
            self.newline(writer)?;
        }
        writer.write_all(token)
    }

    fn item<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if !first {
            writer.write_all(self.item_separator)?;
        }
        self.newline(writer)
    }
}

impl Formatter for DumpFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.open(writer, b"[")
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer, b"]")
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.item(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.open(writer, b"{")
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer, b"}")
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.item(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.key_separator)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if !self.ensure_ascii {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() && ch != '\x7f' {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Recursively order object keys
fn sorted(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => {
            let mut entries: Vec<_> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sorted(value)))
                    .collect(),
            )
        }
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.into_iter().map(sorted).collect())
        }
        other => other,
    }
}

/// Serialize a JSON document as text with the given options
pub(crate) fn dumps(value: serde_json::Value, options: &DumpOptions) -> Result<String, Error> {
    let value = if options.sort_keys {
        sorted(value)
    } else {
        value
    };

    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, DumpFormatter::new(options));
    value
        .serialize(&mut serializer)
        .map_err(|e| filter_error(format!("failed to serialize JSON: {e}")))?;
    String::from_utf8(out).map_err(|e| filter_error(format!("failed to serialize JSON: {e}")))
}

/// Serialize a value to JSON text.
///
/// Usage: `{{ alert | to_json }}` or `{{ alert | to_json(indent=2, sort_keys=true) }}`
///
/// Keyword arguments: `indent`, `sort_keys`, `separators`, `ensure_ascii`.
pub fn to_json(value: Value, kwargs: Kwargs) -> Result<String, Error> {
    let options = DumpOptions::default().with_kwargs(&kwargs, "to_json")?;
    dumps(value_to_json(&value, "to_json")?, &options)
}

/// Human-readable JSON: 4-space indent and sorted keys unless overridden.
///
/// Usage: `{{ alert | to_nice_json }}` or `{{ alert | to_nice_json(2) }}`
pub fn to_nice_json(
    value: Value,
    indent: Option<Value>,
    sort_keys: Option<bool>,
    kwargs: Kwargs,
) -> Result<String, Error> {
    let mut options = DumpOptions {
        indent: Some(" ".repeat(4)),
        sort_keys: true,
        ..DumpOptions::default()
    };
    if let Some(indent) = indent {
        options.indent = indent_string(&indent, "to_nice_json")?;
    }
    if let Some(sort_keys) = sort_keys {
        options.sort_keys = sort_keys;
    }
    let options = options.with_kwargs(&kwargs, "to_nice_json")?;
    dumps(value_to_json(&value, "to_nice_json")?, &options)
}

/// Keep only the listed dotted paths of an object.
///
/// Usage: `{{ alert | filter_json('id, source.ip') }}`
pub fn filter_json(value: Value, include_keys: &str) -> Result<Value, Error> {
    let json = value_to_json(&value, "filter_json")?;
    let map = json
        .as_object()
        .ok_or_else(|| filter_error("filter_json: input must be an object"))?;

    let keys: Vec<&str> = include_keys
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .collect();

    let filtered = DotNode::from_map(map)
        .filter(&keys)
        .map_err(|e| filter_error(format!("filter_json: {e}")))?;
    Ok(json_to_value(&serde_json::Value::Object(filtered.flatten())))
}

#[cfg(test)]
#[path = "json_test.rs"]
mod tests;
