//! Filter documentation served by `GET /filters` and `jl filters`.
//!
//! Maintained by hand next to the registry; the registry tests check that
//! both list the same names.

use indexmap::IndexMap;
use serde::Serialize;
use std::sync::OnceLock;

/// One documented parameter of a filter
#[derive(Debug, Clone, Serialize)]
pub struct FilterInput {
    /// Parameter name
    pub name: &'static str,
    /// Loose type name (str, int, bool, list, any)
    #[serde(rename = "type")]
    pub input_type: &'static str,
    /// What the parameter does
    pub description: &'static str,
}

impl FilterInput {
    pub fn new(name: &'static str, input_type: &'static str, description: &'static str) -> Self {
        Self {
            name,
            input_type,
            description,
        }
    }
}

/// Documentation entry for one filter
#[derive(Debug, Clone, Serialize)]
pub struct FilterDescriptor {
    /// Filter name as used in templates
    pub name: &'static str,
    /// Catalog group; the catalog is keyed by it
    #[serde(skip)]
    pub category: &'static str,
    /// What the filter does
    pub description: &'static str,
    /// Parameters after the piped value
    pub inputs: Vec<FilterInput>,
}

impl FilterDescriptor {
    pub fn new(
        name: &'static str,
        category: &'static str,
        description: &'static str,
        inputs: Vec<FilterInput>,
    ) -> Self {
        Self {
            name,
            category,
            description,
            inputs,
        }
    }
}

const PATTERN: (&str, &str, &str) = ("pattern", "str", "The pattern to search.");
const IGNORECASE: (&str, &str, &str) = (
    "ignorecase",
    "bool",
    "Ignore character case. False by default.",
);

fn input((name, input_type, description): (&'static str, &'static str, &'static str)) -> FilterInput {
    FilterInput::new(name, input_type, description)
}

fn descriptors() -> Vec<FilterDescriptor> {
    vec![
        FilterDescriptor::new(
            "map_priority",
            "Platform",
            "Map numeric priority fields to their English representation.",
            vec![FilterInput::new(
                "priority",
                "int",
                "The numeric priority of the case. Valid options: -1, 40, 60, 80, 100",
            )],
        ),
        FilterDescriptor::new(
            "json2tbl",
            "Formatting",
            "Format a JSON object or list as an HTML table. The output is HTML-escaped \
             automatically; append the |safe filter to emit it as markup.",
            vec![
                FilterInput::new(
                    "build_direction",
                    "str",
                    "TOP_TO_BOTTOM places child objects below their parents, LEFT_TO_RIGHT \
                     places them to the right. Objects only. Default is LEFT_TO_RIGHT.",
                ),
                FilterInput::new(
                    "table_attributes",
                    "dict",
                    "Attributes added to the table tag as key=\"value\", e.g. {\"border\": 1}. \
                     Lists only honour \"class\". Default is none.",
                ),
            ],
        ),
        FilterDescriptor::new(
            "to_nice_json",
            "Formatting",
            "Format a JSON value in a human readable layout. The output is HTML-escaped \
             automatically; append the |safe filter to prevent it.",
            vec![
                FilterInput::new(
                    "indent",
                    "int",
                    "Number of spaces used to indent nested values. 4 by default.",
                ),
                FilterInput::new(
                    "sort_keys",
                    "bool",
                    "Sort object keys alphabetically. True by default.",
                ),
            ],
        ),
        FilterDescriptor::new(
            "comment",
            "Formatting",
            "Comment out text by prefixing each line with the comment marker of a style.",
            vec![FilterInput::new(
                "style",
                "str",
                "Defaults to 'plain' (#). Valid options: erlang (%), c (//), cblock (/* */) \
                 or xml (<!-- -->)",
            )],
        ),
        FilterDescriptor::new(
            "filter_datetime",
            "DateTime",
            "Parse a date/time string or epoch timestamp in most common formats and \
             re-format it. Output defaults to \"%Y/%m/%d %H:%M:%S\".",
            vec![
                FilterInput::new("DateTime", "str", "The date/time value to parse."),
                FilterInput::new(
                    "Format",
                    "str",
                    "strftime format of the result. Default: %Y/%m/%d %H:%M:%S",
                ),
            ],
        ),
        FilterDescriptor::new(
            "timectime",
            "DateTime",
            "Convert seconds since the epoch to a local time string such as \
             'Thu Jan  1 00:00:00 1970'.",
            vec![FilterInput::new(
                "Seconds",
                "int",
                "Time in seconds since the epoch.",
            )],
        ),
        FilterDescriptor::new(
            "is_in_list",
            "Helpers",
            "True if the value is in the supplied list, false otherwise.",
            vec![FilterInput::new("list", "list", "The list to look in.")],
        ),
        FilterDescriptor::new(
            "ternary",
            "Helpers",
            "Pick a value by truthiness: true_val if the value is true, else false_val.",
            vec![
                FilterInput::new("true_val", "any", "Returned when the value is true."),
                FilterInput::new("false_val", "any", "Returned when the value is false."),
                FilterInput::new(
                    "none_val",
                    "any",
                    "Returned when the value is none. Unset by default.",
                ),
            ],
        ),
        FilterDescriptor::new(
            "to_json",
            "Helpers",
            "Serialize a value to JSON text. Accepts indent, sort_keys, separators and \
             ensure_ascii keyword arguments.",
            vec![],
        ),
        FilterDescriptor::new(
            "filter_json",
            "Helpers",
            "Keep only the listed keys of a JSON object. Keys may be dotted paths.",
            vec![FilterInput::new(
                "include_keys",
                "str",
                "Keys to include in the new JSON, comma separated.",
            )],
        ),
        FilterDescriptor::new(
            "regex_match",
            "Regular Expression",
            "True if the value matches the pattern at its start, false otherwise.",
            vec![input(PATTERN), input(IGNORECASE)],
        ),
        FilterDescriptor::new(
            "regex_replace",
            "Regular Expression",
            "Replace all occurrences of the pattern. Groups are referenced as \\1 or \\g<name>.",
            vec![
                input(PATTERN),
                FilterInput::new("replacement", "str", "The replacement string."),
                input(IGNORECASE),
            ],
        ),
        FilterDescriptor::new(
            "regex_search",
            "Regular Expression",
            "True if the pattern is found anywhere in the value.",
            vec![input(PATTERN), input(IGNORECASE)],
        ),
        FilterDescriptor::new(
            "regex_substring",
            "Regular Expression",
            "Find all occurrences of the pattern and return the one at result_index.",
            vec![
                input(PATTERN),
                FilterInput::new(
                    "result_index",
                    "int",
                    "Index of the result, negative counts from the end. 0 by default.",
                ),
                input(IGNORECASE),
            ],
        ),
    ]
}

/// Documentation catalog, built once
static FILTER_CATALOG: OnceLock<IndexMap<&'static str, Vec<FilterDescriptor>>> = OnceLock::new();

/// Filter documentation grouped by category, categories in first-seen order
pub fn filter_catalog() -> &'static IndexMap<&'static str, Vec<FilterDescriptor>> {
    FILTER_CATALOG.get_or_init(|| {
        let mut catalog: IndexMap<&'static str, Vec<FilterDescriptor>> = IndexMap::new();
        for descriptor in descriptors() {
            catalog
                .entry(descriptor.category)
                .or_default()
                .push(descriptor);
        }
        catalog
    })
}

/// Look up the documentation of one filter
pub fn get_filter_by_name(name: &str) -> Option<&'static FilterDescriptor> {
    filter_catalog().values().flatten().find(|d| d.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_categories_in_order() {
        let categories: Vec<&str> = filter_catalog().keys().copied().collect();
        assert_eq!(
            categories,
            ["Platform", "Formatting", "DateTime", "Helpers", "Regular Expression"]
        );
    }

    #[test]
    fn test_catalog_serializes_as_category_map() {
        let json = serde_json::to_value(filter_catalog()).unwrap();
        let formatting = json["Formatting"].as_array().unwrap();
        assert_eq!(formatting[0]["name"], "json2tbl");
        assert_eq!(formatting[0]["inputs"][0]["type"], "str");
        assert!(formatting[0].get("category").is_none());
    }

    #[test]
    fn test_get_filter_by_name() {
        let regex_substring = get_filter_by_name("regex_substring").unwrap();
        assert_eq!(regex_substring.category, "Regular Expression");
        assert_eq!(regex_substring.inputs.len(), 3);
        assert!(get_filter_by_name("nope").is_none());
    }
}
