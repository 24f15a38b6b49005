use stockroom::config::Config;
use stockroom::icons::IconTheme;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("stockroom-test-{}-{}", std::process::id(), name))
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://localhost:8000/api");
    assert_eq!(config.api.timeout_secs, 15);
    assert_eq!(config.ui.entries_per_page, 10);
    assert!(config.ui.show_row_numbers);
    assert_eq!(config.ui.icon_theme, IconTheme::Unicode);
    assert_eq!(config.ui.toast_seconds, 5);
    assert!(!config.logging.enabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    config.api.base_url = "localhost:8000".to_string();
    assert!(config.validate().is_err());

    config = Config::default();
    config.api.timeout_secs = 0;
    assert!(config.validate().is_err());
    config.api.timeout_secs = 301;
    assert!(config.validate().is_err());

    config = Config::default();
    config.ui.entries_per_page = 20;
    assert!(config.validate().is_err());

    config = Config::default();
    config.ui.toast_seconds = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[ui]
entries_per_page = 25
icon_theme = "ascii"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.ui.entries_per_page, 25);
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert!(config.ui.show_row_numbers);
    assert_eq!(config.api.base_url, "http://localhost:8000/api");
}

#[test]
fn test_api_url_override_trims_trailing_slash() {
    let mut config = Config::default();
    config.apply_api_url_override("https://inventory.example.com/api/").unwrap();
    assert_eq!(config.api.base_url, "https://inventory.example.com/api");

    assert!(config.apply_api_url_override("ftp://example.com").is_err());
}

#[test]
fn test_generated_config_loads_back() {
    let path = temp_path("generated.toml");
    Config::generate_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Stockroom Configuration File"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.ui.entries_per_page, Config::default().ui.entries_per_page);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_invalid_file_is_rejected() {
    let path = temp_path("invalid.toml");
    std::fs::write(&path, "[ui]\nentries_per_page = 7\n").unwrap();
    assert!(Config::load_from_file(&path).is_err());
    let _ = std::fs::remove_file(&path);
}
