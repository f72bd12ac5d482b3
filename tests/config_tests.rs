//! Tests for loading service configuration from YAML files

use orders::config::ServiceConfig;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(yaml.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_config_file() {
    let file = write_config(
        r#"
server:
  host: 0.0.0.0
  port: 8081
logging:
  filter: "orders=debug,tower_http=info"
"#,
    );

    let config = ServiceConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.bind_address(), "0.0.0.0:8081");
    assert_eq!(config.logging.filter, "orders=debug,tower_http=info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("{}\n");

    let config = ServiceConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config, ServiceConfig::default());
}

#[test]
fn test_missing_file_reports_path() {
    let err = ServiceConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.yaml"));
}

#[test]
fn test_out_of_range_port_is_parse_error() {
    let file = write_config("server:\n  port: 70000\n");

    assert!(ServiceConfig::from_yaml_file(file.path().to_str().unwrap()).is_err());
}
