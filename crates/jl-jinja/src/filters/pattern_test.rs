use super::*;
use crate::filters::render_filtered;
use serde_json::json;

#[test]
fn test_translate_replacement() {
    assert_eq!(translate_replacement(r"\2 \1").unwrap(), "${2} ${1}");
    assert_eq!(translate_replacement(r"\g<1>0").unwrap(), "${1}0");
    assert_eq!(translate_replacement(r"\g<word>!").unwrap(), "${word}!");
    assert_eq!(translate_replacement("cost: $5").unwrap(), "cost: $$5");
    assert_eq!(translate_replacement(r"a\\b").unwrap(), r"a\b");
    assert_eq!(translate_replacement(r"line\n").unwrap(), "line\n");
}

#[test]
fn test_translate_replacement_rejects_bad_group() {
    assert!(translate_replacement(r"\g1").is_err());
    assert!(translate_replacement(r"\g<name").is_err());
    assert!(translate_replacement(r"\g<>").is_err());
}

#[test]
fn test_regex_match_is_anchored_at_start() {
    let out = render_filtered(
        r"{{ 'web-01' | regex_match('web') }} {{ 'my-web' | regex_match('web') }} {{ 'WEB' | regex_match('web', ignorecase=true) }}",
        json!({}),
    )
    .unwrap();
    assert_eq!(out, "true false true");
}

#[test]
fn test_regex_search_anywhere() {
    let out = render_filtered(
        "{{ 'my-web' | regex_search('web') }} {{ 'MY-WEB' | regex_search('web', true) }} {{ 'db' | regex_search('web') }}",
        json!({}),
    )
    .unwrap();
    assert_eq!(out, "true true false");
}

#[test]
fn test_non_string_input_uses_display_form() {
    let out = render_filtered(r"{{ code | regex_match('4\\d\\d') }}", json!({"code": 404})).unwrap();
    assert_eq!(out, "true");
}

#[test]
fn test_regex_replace_with_group_references() {
    let out = render_filtered(
        r"{{ name | regex_replace('(\\w+) (\\w+)', '\\2, \\1') }}",
        json!({"name": "Ada Lovelace"}),
    )
    .unwrap();
    assert_eq!(out, "Lovelace, Ada");

    let out = render_filtered(
        r"{{ 'a1b22' | regex_replace('(?P<n>\\d+)', '<\\g<n>>') }}",
        json!({}),
    )
    .unwrap();
    assert_eq!(out, "a<1>b<22>");
}

#[test]
fn test_regex_replace_ignorecase_and_literal_dollar() {
    let out = render_filtered(
        "{{ 'Price PRICE price' | regex_replace('price', '$', ignorecase=true) }}",
        json!({}),
    )
    .unwrap();
    assert_eq!(out, "$ $ $");
}

#[test]
fn test_regex_substring_whole_match_and_group() {
    let ctx = json!({"msg": "user=alice id=7 user=bob"});
    let out = render_filtered(
        r"{{ msg | regex_substring('user=\\w+') }}|{{ msg | regex_substring('user=(\\w+)', 1) }}|{{ msg | regex_substring('user=(\\w+)', -1) }}",
        ctx,
    )
    .unwrap();
    assert_eq!(out, "user=alice|bob|bob");
}

#[test]
fn test_regex_substring_multiple_groups_is_list() {
    let out = render_filtered(
        r"{% set pair = 'k1=v1' | regex_substring('(\\w+)=(\\w+)') %}{{ pair[0] }}:{{ pair[1] }}",
        json!({}),
    )
    .unwrap();
    assert_eq!(out, "k1:v1");
}

#[test]
fn test_regex_substring_keyword_index() {
    let out = render_filtered(
        "{{ 'a b c' | regex_substring('[a-z]', result_index=2) }}",
        json!({}),
    )
    .unwrap();
    assert_eq!(out, "c");
}

#[test]
fn test_regex_substring_out_of_range() {
    let err = render_filtered(r"{{ 'abc' | regex_substring('\\d') }}", json!({})).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_invalid_pattern_is_error() {
    let err = render_filtered("{{ 'x' | regex_search('(') }}", json!({})).unwrap_err();
    assert!(err.to_string().contains("invalid pattern"));
}
