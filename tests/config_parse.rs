use resume_coach::core::ConfigManager;
use std::io::Write;

#[test]
fn parse_example_config() {
    let raw = include_str!("../resume-coach.example.yaml");

    let local = ConfigManager::from_yaml_str(raw, "local").expect("parse YAML");
    assert_eq!(local.service.base_url, "http://127.0.0.1:8000");
    assert_eq!(local.service.timeout_seconds, None);
    assert_eq!(local.logging.level, "debug");

    let prod = ConfigManager::from_yaml_str(raw, "production").expect("parse YAML");
    assert_eq!(prod.service.timeout_seconds, Some(90));
}

#[test]
fn load_explicit_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "local:\n  service:\n    base_url: http://192.168.1.20:8000").unwrap();

    let config = ConfigManager::load(Some(file.path())).unwrap();
    // ENVIRONMENT and RESUME_COACH_API_URL may be set where the tests run
    if config.environment != "production" && std::env::var("RESUME_COACH_API_URL").is_err() {
        assert_eq!(config.service.base_url, "http://192.168.1.20:8000");
    }
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yaml");
    assert!(ConfigManager::load(Some(&missing)).is_err());
}

#[test]
fn invalid_yaml_is_an_error() {
    assert!(ConfigManager::from_yaml_str("local: [unclosed", "local").is_err());
}
