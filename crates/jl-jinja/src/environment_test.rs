use super::*;

fn render(source: &str, ctx: serde_json::Value) -> RenderResult<String> {
    let engine = TemplateEngine::new();
    engine.render_str(source, Value::from_serialize(&ctx))
}

#[test]
fn test_render_simple() {
    let out = render("Hello {{ name }}", serde_json::json!({"name": "world"})).unwrap();
    assert_eq!(out, "Hello world");
}

#[test]
fn test_output_is_html_escaped() {
    let out = render("{{ v }}|{{ v | safe }}", serde_json::json!({"v": "<b>&</b>"})).unwrap();
    assert_eq!(out, "&lt;b&gt;&amp;&lt;/b&gt;|<b>&</b>");
}

#[test]
fn test_escaping_matches_markupsafe() {
    let out = render(
        "{{ url }}|{{ q }}|{{ n }}|{{ items }}",
        serde_json::json!({
            "url": "https://example.com/a?b=1&c=2",
            "q": "it's \"quoted\"",
            "n": 2.5,
            "items": ["a/b"]
        }),
    )
    .unwrap();
    assert_eq!(
        out,
        "https://example.com/a?b=1&amp;c=2|it&#39;s &#34;quoted&#34;|2.5|[&#34;a/b&#34;]"
    );
}

#[test]
fn test_default_datetime_output_keeps_slashes() {
    let out = render(
        "{{ d | filter_datetime }}",
        serde_json::json!({"d": "2024-01-05 03:04:05"}),
    )
    .unwrap();
    assert_eq!(out, "2024/01/05 03:04:05");
}

#[test]
fn test_dict_methods() {
    let ctx = serde_json::json!({"obj": {"a": 1, "b": 2}});
    let items = render("{% for k, v in obj.items() %}{{ k }}={{ v }};{% endfor %}", ctx.clone()).unwrap();
    assert_eq!(items, "a=1;b=2;");

    let keys = render("{% for k in obj.keys() %}{{ k }}{% endfor %}", ctx.clone()).unwrap();
    assert_eq!(keys, "ab");

    let values = render("{% for v in obj.values() %}{{ v }}{% endfor %}", ctx.clone()).unwrap();
    assert_eq!(values, "12");

    let get = render("{{ obj.get('a') }}/{{ obj.get('z', 'none') }}", ctx).unwrap();
    assert_eq!(get, "1/none");
}

#[test]
fn test_string_methods() {
    let out = render(
        "{{ s.upper() }}|{{ s.split(',') | join('+') }}|{{ s.replace('a', 'x') }}|{{ ' pad '.strip() }}",
        serde_json::json!({"s": "a,b"}),
    )
    .unwrap();
    assert_eq!(out, "A,B|a+b|x,b|pad");

    let out = render(
        "{{ s.startswith('err') }} {{ s.title() }}",
        serde_json::json!({"s": "error found"}),
    )
    .unwrap();
    assert_eq!(out, "true Error Found");
}

#[test]
fn test_block_whitespace_is_trimmed() {
    let source = "<ul>\n    {% for x in items %}\n    <li>{{ x }}</li>\n    {% endfor %}\n</ul>";
    let out = render(source, serde_json::json!({"items": [1, 2]})).unwrap();
    assert_eq!(out, "<ul>\n    <li>1</li>\n    <li>2</li>\n</ul>");
}

#[test]
fn test_trailing_newline_dropped() {
    let out = render("line\n", serde_json::json!({})).unwrap();
    assert_eq!(out, "line");
}

#[test]
fn test_loop_controls() {
    let source = "{% for i in range(10) %}{% if i == 1 %}{% continue %}{% endif %}{% if i == 4 %}{% break %}{% endif %}{{ i }}{% endfor %}";
    let out = render(source, serde_json::json!({})).unwrap();
    assert_eq!(out, "023");
}

#[test]
fn test_do_statement_discards_call_result() {
    let out = render("a{% do s.upper() %}b{{ s }}", serde_json::json!({"s": "x"})).unwrap();
    assert_eq!(out, "abx");
}

#[test]
fn test_do_requires_call_expression() {
    let err = render("{% do s %}", serde_json::json!({"s": "x"})).unwrap_err();
    assert!(matches!(err, RenderError::TemplateSyntax { .. }));
}

#[test]
fn test_list_append_is_a_runtime_error() {
    let err = render("{% set l = [] %}{% do l.append(1) %}", serde_json::json!({})).unwrap_err();
    assert!(matches!(err, RenderError::TemplateRuntime { .. }));
}

#[test]
fn test_undefined_renders_empty() {
    let out = render("[{{ missing }}][{{ obj.missing }}]", serde_json::json!({"obj": {}})).unwrap();
    assert_eq!(out, "[][]");
}

#[test]
fn test_custom_filters_available() {
    let out = render("{{ p | map_priority }}", serde_json::json!({"p": "100"})).unwrap();
    assert_eq!(out, "critical");
}

#[test]
fn test_syntax_error_reports_line() {
    let err = render("ok\nok\n{% if %}", serde_json::json!({})).unwrap_err();
    assert!(matches!(err, RenderError::TemplateSyntax { line: Some(3), .. }));
    assert!(err.to_string().starts_with("Syntax error in jinja2 template: "));
}

#[test]
fn test_runtime_error_classified() {
    let err = render("{{ 1 | is_in_list(5) }}", serde_json::json!({})).unwrap_err();
    assert!(matches!(err, RenderError::TemplateRuntime { .. }));
    assert!(err.to_string().starts_with("Error rendering the template: "));
}

#[test]
fn test_shared_engine_is_reused() {
    let a = TemplateEngine::shared() as *const TemplateEngine;
    let b = TemplateEngine::shared() as *const TemplateEngine;
    assert_eq!(a, b);
}
