use codeforge::config::Config;
use codeforge::transport::TransportMode;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.default_model, "mistral");
    assert_eq!(config.api_base, "http://localhost:11434");
    assert_eq!(config.default_language, "python");
    assert_eq!(config.transport, TransportMode::Auto);
}

#[test]
fn test_config_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config
        .update(
            Some("codellama".to_string()),
            Some("http://localhost:9999".to_string()),
            Some("Rust".to_string()),
            Some(TransportMode::Http),
        )
        .expect("update should succeed");

    config.save_to(&path).expect("save should succeed");
    let loaded = Config::load_from(&path).expect("load should succeed");

    assert_eq!(loaded, config);
    assert_eq!(loaded.default_model, "codellama");
    assert_eq!(loaded.default_language, "rust");
    assert_eq!(loaded.transport, TransportMode::Http);
}

#[test]
fn test_load_from_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("does-not-exist.toml");

    let config = Config::load_from(&path).expect("load should succeed");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_config_file_fills_in_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "default_model = \"llama3\"\n").expect("write should succeed");

    let config = Config::load_from(&path).expect("load should succeed");
    assert_eq!(config.default_model, "llama3");
    assert_eq!(config.api_base, "http://localhost:11434");
    assert_eq!(config.transport, TransportMode::Auto);
}

#[test]
fn test_update_rejects_unknown_language() {
    let mut config = Config::default();
    let result = config.update(None, None, Some("cobol".to_string()), None);

    assert!(result.is_err());
    assert_eq!(config.default_language, "python");
}

#[test]
fn test_update_normalizes_language_case() {
    let mut config = Config::default();
    config
        .update(None, None, Some("Kotlin".to_string()), None)
        .expect("update should succeed");
    assert_eq!(config.default_language, "kotlin");
}
