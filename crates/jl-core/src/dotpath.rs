//! Dotted-path access over nested JSON objects.
//!
//! A [`DotNode`] wraps a JSON object so that fields can be read and written
//! with paths such as `"alert.source.ip"`. Nested objects become nested
//! nodes and arrays become [`Attr::Seq`] whose object elements are nodes.
//!
//! When a path crosses a sequence, resolution continues into its *first*
//! element only. `{"hits": [{"ip": 1}, {"ip": 2}]}` resolves `hits.ip` to `1`.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use thiserror::Error;

/// Field names that must not be stored verbatim.
///
/// A key whose underscore-stripped form is listed here gains one leading
/// underscore on the way in and loses exactly one on the way out, which keeps
/// the mapping reversible even when `self` and `_self` appear side by side.
const RESERVED_NAMES: &[&str] = &["self"];

/// Errors raised while resolving or writing a dotted path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A path segment names a field that does not exist
    #[error("'{segment}' not found while resolving '{path}'")]
    AttributeMissing { path: String, segment: String },

    /// A path segment crossed an empty list
    #[error("'{segment}' is an empty list while resolving '{path}'")]
    EmptySequence { path: String, segment: String },

    /// A write tried to descend through a non-object value
    #[error("cannot set '{path}': '{segment}' is not an object")]
    NotANode { path: String, segment: String },
}

/// A value stored under a node field
#[derive(Debug, Clone, PartialEq)]
pub enum Attr {
    /// Any JSON value that is not an object or an array of the outer level
    Scalar(Value),
    /// A nested object
    Node(DotNode),
    /// An array; elements are `Node` or `Scalar` (nested arrays stay scalar)
    Seq(Vec<Attr>),
}

impl Attr {
    /// Wrap a JSON value as it appears directly under an object field
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) => Attr::Node(DotNode::from_map(map)),
            Value::Array(items) => Attr::Seq(items.iter().map(Attr::from_element).collect()),
            other => Attr::Scalar(other.clone()),
        }
    }

    fn from_element(value: &Value) -> Self {
        match value {
            Value::Object(map) => Attr::Node(DotNode::from_map(map)),
            other => Attr::Scalar(other.clone()),
        }
    }

    /// Convert back into plain JSON
    pub fn to_json(&self) -> Value {
        match self {
            Attr::Scalar(value) => value.clone(),
            Attr::Node(node) => Value::Object(node.flatten()),
            Attr::Seq(items) => Value::Array(items.iter().map(Attr::to_json).collect()),
        }
    }
}

/// A JSON object addressable by dotted paths
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DotNode {
    fields: IndexMap<String, Attr>,
}

impl DotNode {
    /// Create an empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON object, recursively
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let fields = map
            .iter()
            .map(|(key, value)| (escape_name(key), Attr::from_json(value)))
            .collect();
        Self { fields }
    }

    /// Number of direct fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the node has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolve a dotted path
    pub fn get(&self, path: &str) -> Result<&Attr, PathError> {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or_default();
        let mut current = self.field(path, first)?;

        for segment in segments {
            let node = match current {
                Attr::Node(node) => node,
                Attr::Seq(items) => match items.first() {
                    Some(Attr::Node(node)) => node,
                    Some(_) => return Err(missing(path, segment)),
                    None => {
                        return Err(PathError::EmptySequence {
                            path: path.to_string(),
                            segment: segment.to_string(),
                        })
                    }
                },
                Attr::Scalar(_) => return Err(missing(path, segment)),
            };
            current = node.field(path, segment)?;
        }

        Ok(current)
    }

    /// Write `value` at a dotted path, creating missing intermediate nodes.
    ///
    /// An empty path leaves the node unchanged.
    pub fn set(&mut self, path: &str, value: Attr) -> Result<&mut Self, PathError> {
        let segments: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = segments.split_last().filter(|_| !path.is_empty()) else {
            return Ok(self);
        };

        let mut node: &mut DotNode = self;
        for segment in parents {
            let slot = node
                .fields
                .entry(escape_name(segment))
                .or_insert_with(|| Attr::Node(DotNode::new()));
            node = match slot {
                Attr::Node(child) => child,
                _ => {
                    return Err(PathError::NotANode {
                        path: path.to_string(),
                        segment: segment.to_string(),
                    })
                }
            };
        }
        node.fields.insert(escape_name(last), value);

        Ok(self)
    }

    /// Build a new node holding only the given paths.
    ///
    /// Paths are copied in the order given; repeating a path is harmless.
    pub fn filter<S: AsRef<str>>(&self, paths: &[S]) -> Result<DotNode, PathError> {
        let mut filtered = DotNode::new();
        for path in paths {
            let path = path.as_ref();
            let value = self.get(path)?.clone();
            filtered.set(path, value)?;
        }
        Ok(filtered)
    }

    /// Convert back into a JSON object, restoring escaped field names
    pub fn flatten(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(key, attr)| (unescape_name(key), attr.to_json()))
            .collect()
    }

    fn field(&self, path: &str, segment: &str) -> Result<&Attr, PathError> {
        self.fields
            .get(escape_name(segment).as_str())
            .ok_or_else(|| missing(path, segment))
    }
}

impl From<&Map<String, Value>> for DotNode {
    fn from(map: &Map<String, Value>) -> Self {
        DotNode::from_map(map)
    }
}

fn missing(path: &str, segment: &str) -> PathError {
    PathError::AttributeMissing {
        path: path.to_string(),
        segment: segment.to_string(),
    }
}

fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name.trim_start_matches('_'))
}

fn escape_name(name: &str) -> String {
    if is_reserved(name) {
        format!("_{name}")
    } else {
        name.to_string()
    }
}

fn unescape_name(name: &str) -> String {
    match name.strip_prefix('_') {
        Some(stripped) if is_reserved(name) => stripped.to_string(),
        _ => name.to_string(),
    }
}

#[cfg(test)]
#[path = "dotpath_test.rs"]
mod tests;
