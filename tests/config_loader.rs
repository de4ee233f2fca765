use std::fs;
use tempfile::TempDir;
use tripmate::config::{Config, ConfigError};

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "http://172.20.10.3:5000"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://172.20.10.3:5000");
    assert_eq!(config.timing.splash_ms, 4000);
    assert_eq!(config.timing.success_delay_ms, 1500);
    assert_eq!(config.base_url().unwrap().port(), Some(5000));
}

#[test]
fn timing_overrides_are_read() {
    let (_dir, path) = write_config(
        r#"
[timing]
splash_ms = 250
success_delay_ms = 1000
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.timing.splash().as_millis(), 250);
    assert_eq!(config.timing.success_delay().as_millis(), 1000);
}

#[test]
fn malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn invalid_url_is_validation_error() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "not a url"
"#,
    );
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("api.base_url"));
        }
        other => panic!("expected ValidationError, got {:?}", other),
    }
}

#[test]
fn zero_splash_is_rejected() {
    let (_dir, path) = write_config("[timing]\nsplash_ms = 0\n");
    assert!(Config::load_from(&path).is_err());
}
