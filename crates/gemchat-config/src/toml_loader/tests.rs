//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use gemchat_common::{ConfigError, ModelId};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_gemchat_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[model]
name = "gemini-2.5-flash"
system_instruction = "Be terse"

[api]
request_timeout_secs = 30
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.name, ModelId::Gemini25Flash);
    assert_eq!(config.model.system_instruction, "Be terse");
    assert_eq!(config.api.request_timeout_secs, 30);
    // Defaults preserved
    assert_eq!(config.api.api_key_env, "GEMINI_API_KEY");
    assert_eq!(config.api.connect_timeout_secs, 10);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn out_of_range_values_are_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[model]\ntemperature = 9.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.model.temperature - 9.0).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gemchat").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.name, ModelId::FlashLatest);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::ChatConfig;

    let config: ChatConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // May be unavailable in some CI environments
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("gemchat"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn existing_config_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[model]\nname = \"gemini-2.5-pro\"\n").unwrap();

    create_default_config(&path).unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.name, ModelId::Gemini25Pro);
}

#[test]
fn config_file_lives_in_app_dir() {
    if let (Some(dir), Ok(path)) = (app_config_dir(), default_config_path()) {
        assert!(dir.ends_with("gemchat"));
        assert_eq!(path.parent(), Some(dir.as_path()));
    }
}
