use super::*;
use crate::filters::render_filtered;
use serde_json::json;

#[test]
fn test_map_priority_known_keys() {
    assert_eq!(map_priority(Value::from("80")), Value::from("high"));
    assert_eq!(map_priority(Value::from("-1")), Value::from("info"));
    assert_eq!(map_priority(Value::from("100")), Value::from("critical"));
}

#[test]
fn test_map_priority_unknown_is_none() {
    assert!(map_priority(Value::from("7")).is_none());
    assert!(map_priority(Value::from(80)).is_none());
}

#[test]
fn test_map_priority_in_template() {
    let out = render_filtered(
        "{{ p | map_priority }}|{{ q | map_priority is none }}",
        json!({"p": "60", "q": "61"}),
    )
    .unwrap();
    assert_eq!(out, "medium|true");
}

#[test]
fn test_ternary_truthy_and_falsy() {
    let out = render_filtered(
        "{{ a | ternary('yes', 'no') }} {{ b | ternary('yes', 'no') }} {{ c | ternary('yes', 'no') }}",
        json!({"a": 1, "b": "", "c": [0]}),
    )
    .unwrap();
    assert_eq!(out, "yes no yes");
}

#[test]
fn test_ternary_none_value() {
    let out = render_filtered(
        "{{ v | ternary('t', 'f', 'n') }} {{ v | ternary('t', 'f') }} {{ v | ternary('t', 'f', none_val='kw') }}",
        json!({"v": null}),
    )
    .unwrap();
    assert_eq!(out, "n f kw");
}

#[test]
fn test_ternary_undefined_is_false() {
    let out = render_filtered("{{ missing | ternary('t', 'f', 'n') }}", json!({})).unwrap();
    assert_eq!(out, "f");
}

#[test]
fn test_is_in_list() {
    let out = render_filtered(
        "{{ 'b' | is_in_list(['a', 'b']) }} {{ 3 | is_in_list([1, 2]) }} {{ x | is_in_list(items) }}",
        json!({"x": {"k": 1}, "items": [{"k": 1}]}),
    )
    .unwrap();
    assert_eq!(out, "true false true");
}

#[test]
fn test_is_in_list_rejects_non_list() {
    let err = render_filtered("{{ 1 | is_in_list(2) }}", json!({})).unwrap_err();
    assert!(err.to_string().contains("is_in_list"));
}
