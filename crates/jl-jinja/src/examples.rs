//! Example payloads served by `GET /examples` and `jl examples`.

use jl_core::{RenderMode, RenderRequest};
use serde::Serialize;
use std::sync::OnceLock;

/// A ready-to-render sample request
#[derive(Debug, Clone, Serialize)]
pub struct Example {
    /// Title shown to users
    pub name: &'static str,
    /// Mode the example is meant to run in
    pub mode: RenderMode,
    /// Template source
    pub template: &'static str,
    /// JSON-encoded input document
    #[serde(rename = "inputJson")]
    pub input_json: &'static str,
}

impl Example {
    /// The render request this example stands for
    pub fn to_request(&self) -> RenderRequest {
        RenderRequest::new(self.template, self.input_json).with_mode(self.mode.clone())
    }
}

const ALERT_JSON: &str = r#"{
    "alert": {
        "id": "A-1042",
        "name": "Suspicious Login",
        "priority": "80",
        "created": 1684333805,
        "detected_at": "2023-05-17T14:30:05Z",
        "source": {"ip": "10.0.0.12", "port": 22, "country": "NL"},
        "tags": ["auth", "ssh"],
        "events": [
            {"user": "alice", "result": "failure"},
            {"user": "alice", "result": "success"}
        ]
    }
}"#;

const ENTITIES_JSON: &str = r#"[
    {
        "Entity": "10.0.0.12",
        "EntityResult": {"type": "ADDRESS", "reputation": "malicious", "score": 92, "reports": ["spam", "botnet"]}
    },
    {
        "Entity": "workstation-7.corp.local",
        "EntityResult": {"type": "HOSTNAME", "reputation": "clean", "score": 3, "reports": []}
    }
]"#;

fn examples() -> Vec<Example> {
    vec![
        Example {
            name: "Alert summary",
            mode: RenderMode::Render,
            template: "{% set alert = input_json.alert %}\
Alert {{ alert.id }}: {{ alert.name }}
Priority: {{ alert.priority | map_priority }}
Detected: {{ alert.detected_at | filter_datetime('%d %b %Y %H:%M') }}
Source: {{ alert.source.ip }}:{{ alert.source.port }}
Tags: {{ alert.tags | join(', ') }}",
            input_json: ALERT_JSON,
        },
        Example {
            name: "Alert as HTML table",
            mode: RenderMode::Render,
            template: "{{ input_json.alert | json2tbl | safe }}",
            input_json: ALERT_JSON,
        },
        Example {
            name: "Event list table",
            mode: RenderMode::Render,
            template: "{{ input_json.alert.events | json2tbl(table_attributes={'class': 'events'}) | safe }}",
            input_json: ALERT_JSON,
        },
        Example {
            name: "Pretty JSON of selected fields",
            mode: RenderMode::Render,
            template: "{{ input_json.alert | filter_json('id, source.ip, tags') | to_nice_json | safe }}",
            input_json: ALERT_JSON,
        },
        Example {
            name: "Loops and conditions",
            mode: RenderMode::Render,
            template: "{% set ns = namespace(failures=0) %}
{% for event in input_json.alert.events %}
{% if event.result == 'success' %}{% break %}{% endif %}
{% set ns.failures = ns.failures + 1 %}
{% endfor %}
Failed attempts before success: {{ ns.failures }}
SSH: {{ 'ssh' | is_in_list(input_json.alert.tags) | ternary('yes', 'no') }}",
            input_json: ALERT_JSON,
        },
        Example {
            name: "Regular expressions",
            mode: RenderMode::Render,
            template: "{% set name = input_json.alert.name %}\
{{ name | regex_replace('(\\\\w+) (\\\\w+)', '\\\\2 \\\\1') }}
{{ name | regex_search('login', ignorecase=true) }}
{{ input_json.alert.source.ip | regex_substring('(\\\\d+)$') }}",
            input_json: ALERT_JSON,
        },
        Example {
            name: "Commented output",
            mode: RenderMode::Render,
            template: "{{ ('Generated from alert ' ~ input_json.alert.id) | comment('cblock') }}",
            input_json: ALERT_JSON,
        },
        Example {
            name: "Entity insights",
            mode: RenderMode::Entity,
            template: "{{ type }} is {{ reputation }} (score {{ score }})\
{% if reports %}: {{ reports | join(', ') }}{% endif %}",
            input_json: ENTITIES_JSON,
        },
    ]
}

/// Example catalog, built once
static EXAMPLE_CATALOG: OnceLock<Vec<Example>> = OnceLock::new();

/// All examples, in display order
pub fn example_catalog() -> &'static [Example] {
    EXAMPLE_CATALOG.get_or_init(examples)
}
