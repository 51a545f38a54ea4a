// tests/config_test.rs
use git_semver::config::{load_config, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.defaults.base_version, "0.0.0");
    assert!(config.output.color);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[defaults]
base_version = "1.5.0"

[output]
color = false
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.defaults.base_version, "1.5.0");
    assert!(!config.output.color);
}

#[test]
fn test_load_partial_file_keeps_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[output]\ncolor = false\n")
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.defaults.base_version, "0.0.0");
    assert!(!config.output.color);
}

#[test]
fn test_load_missing_explicit_file_is_error() {
    let result = load_config(Some("/nonexistent/gitsemver.toml"));
    assert!(result.is_err());
}

#[test]
fn test_load_malformed_file_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"defaults = not valid toml [").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}
