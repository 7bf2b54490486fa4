use super::*;

#[test]
fn test_parse_empty_config_uses_defaults() {
    let config = ServerConfig::from_yaml("").unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.bind_addr(), "127.0.0.1:5000");
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
host: 0.0.0.0
port: 8080
debug: true
max_body_bytes: 1024
"#;
    let config = ServerConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert!(config.debug);
    assert_eq!(config.max_body_bytes, 1024);
}

#[test]
fn test_partial_config_fills_defaults() {
    let config = ServerConfig::from_yaml("port: 9000").unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9000);
    assert!(!config.debug);
}

#[test]
fn test_unknown_field_rejected() {
    let err = ServerConfig::from_yaml("hots: localhost").unwrap_err();
    assert!(matches!(err, CoreError::ConfigParseError { .. }));
}

#[test]
fn test_invalid_values_rejected() {
    assert!(matches!(
        ServerConfig::from_yaml("host: ''"),
        Err(CoreError::ConfigInvalid { .. })
    ));
    assert!(matches!(
        ServerConfig::from_yaml("max_body_bytes: 0"),
        Err(CoreError::ConfigInvalid { .. })
    ));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jinjalab.yml");
    std::fs::write(&path, "port: 5050\n").unwrap();

    let config = ServerConfig::load(&path).unwrap();
    assert_eq!(config.port, 5050);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ServerConfig::load(&dir.path().join("missing.yml")).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}
