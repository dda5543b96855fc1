//! Configuration loading tests

use ftx_rest::config::Config;
use ftx_rest::telemetry::LogFormat;
use std::io::Write;

#[test]
fn test_config_example_loads() {
    let config = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example")).unwrap();
    assert_eq!(config.client.base_url, "https://ftx.com/api/");
    assert_eq!(config.client.header_prefix, "FTX");
    assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
}

#[test]
fn test_config_from_tempfile() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [client]
        base_url = "http://localhost:8080/api"
        timeout_secs = 2

        [telemetry]
        log_format = "json"
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.client.base_url, "http://localhost:8080/api");
    assert_eq!(config.client.timeout_secs, 2);
    assert_eq!(config.telemetry.log_format, LogFormat::Json);
    assert_eq!(config.telemetry.log_level, "info");
}

#[test]
fn test_invalid_toml_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[client\nbase_url = ").unwrap();
    assert!(Config::load(file.path()).is_err());
}
