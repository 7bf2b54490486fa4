use super::*;
use crate::filters::render_filtered;
use serde_json::json;

fn layout(style: &str) -> CommentLayout {
    CommentLayout::for_style(style, None).unwrap()
}

#[test]
fn test_c_style_frames_body() {
    assert_eq!(layout("c").apply("a\nb"), "//\n// a\n// b\n//");
}

#[test]
fn test_c_style_body_only() {
    let mut l = layout("c");
    l.prefix_count = 0;
    l.postfix_count = 0;
    assert_eq!(l.apply("a\nb"), "// a\n// b");
}

#[test]
fn test_plain_trims_decoration_only_lines() {
    assert_eq!(layout("plain").apply("a\n\nb"), "#\n# a\n#\n# b\n#");
}

#[test]
fn test_erlang_style() {
    assert_eq!(layout("erlang").apply("x"), "%\n% x\n%");
}

#[test]
fn test_cblock_style() {
    assert_eq!(layout("cblock").apply("abc"), "/*\n *\n * abc\n *\n */");
}

#[test]
fn test_xml_style() {
    assert_eq!(layout("xml").apply("abc"), "<!--\n -\n - abc\n -\n-->");
}

#[test]
fn test_custom_decoration_seeds_frame_lines() {
    let l = CommentLayout::for_style("plain", Some(";; ")).unwrap();
    assert_eq!(l.apply("x"), ";;\n;; x\n;;");
}

#[test]
fn test_unknown_style() {
    assert!(CommentLayout::for_style("cobol", None).is_none());
}

#[test]
fn test_filter_positional_and_keyword_style() {
    let ctx = json!({"text": "a\nb"});
    let positional = render_filtered("{{ text | comment('c') }}", ctx.clone()).unwrap();
    let keyword = render_filtered("{{ text | comment(style='c') }}", ctx).unwrap();
    assert_eq!(positional, "//\n// a\n// b\n//");
    assert_eq!(positional, keyword);
}

#[test]
fn test_filter_keyword_overrides() {
    let out = render_filtered(
        "{{ text | comment('c', prefix_count=0, postfix_count=0) }}",
        json!({"text": "a\nb"}),
    )
    .unwrap();
    assert_eq!(out, "// a\n// b");

    let out = render_filtered(
        "{{ 'x' | comment(decoration='-- ', prefix='', postfix_count=2, end='END') }}",
        json!({}),
    )
    .unwrap();
    assert_eq!(out, "-- x\n--\n--\nEND");
}

#[test]
fn test_filter_default_style_is_plain() {
    let out = render_filtered("{{ 'x' | comment }}", json!({})).unwrap();
    assert_eq!(out, "#\n# x\n#");
}

#[test]
fn test_filter_unknown_style_errors() {
    let err = render_filtered("{{ 'x' | comment('cobol') }}", json!({})).unwrap_err();
    assert!(err.to_string().contains("unknown style"));
}
