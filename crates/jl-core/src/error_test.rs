use super::*;

#[test]
fn test_json_syntax_error_keeps_position() {
    let err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": oops\n}").unwrap_err();
    let render_err = RenderError::from(err);
    assert_eq!(render_err.kind_name(), "JSONDecodeError");
    assert_eq!(render_err.lineno(), Some(2));
    assert!(render_err.colno().is_some_and(|c| c > 0));
    assert!(render_err.to_string().starts_with("Value error in JSON: "));
}

#[test]
fn test_json_eof_is_decode_error() {
    let err = serde_json::from_str::<serde_json::Value>("[1, 2").unwrap_err();
    assert!(matches!(
        RenderError::from(err),
        RenderError::JsonDecode { line: 1, .. }
    ));
}

#[test]
fn test_empty_json_input_points_at_first_column() {
    let err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
    let render_err = RenderError::from(err);
    assert_eq!(render_err.lineno(), Some(1));
    assert_eq!(render_err.colno(), Some(1));
}

#[test]
fn test_json_data_error_has_no_position() {
    let err = serde_json::from_str::<u8>("300").unwrap_err();
    let render_err = RenderError::from(err);
    assert_eq!(render_err.kind_name(), "ValueError");
    assert_eq!(render_err.lineno(), None);
    assert_eq!(render_err.colno(), None);
}

#[test]
fn test_syntax_error_message_prefix() {
    let err = RenderError::TemplateSyntax {
        message: "unexpected end of input".to_string(),
        line: Some(3),
    };
    assert_eq!(
        err.to_string(),
        "Syntax error in jinja2 template: unexpected end of input"
    );
    assert_eq!(err.lineno(), Some(3));
    assert_eq!(err.colno(), None);
}

#[test]
fn test_missing_field_message() {
    let err = RenderError::MissingField {
        field: "EntityResult".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "'EntityResult' is missing in one of the entities object"
    );
}

#[test]
fn test_unknown_mode_message() {
    let err = RenderError::UnknownMode {
        mode: "batch".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Error rendering the template: Unknown mode batch"
    );
}

#[test]
fn test_every_error_is_a_client_error() {
    let errors = [
        RenderError::InvalidShape,
        RenderError::RequestMalformed {
            message: "x".to_string(),
        },
        RenderError::TemplateRuntime {
            message: "x".to_string(),
        },
    ];
    for err in errors {
        assert_eq!(err.status_code(), 400);
    }
}
