use reportreel::config::{Config, DEFAULT_WEBHOOK_URL};
use reportreel::ConfigError;

#[test]
fn minimal_config_deserializes_with_defaults() {
    let parsed: Config = toml::from_str("[wizard]\nlock_back_while_submitting = true\n")
        .expect("minimal config should deserialize");

    assert_eq!(parsed.webhook.url, DEFAULT_WEBHOOK_URL);
    assert_eq!(parsed.webhook.timeout_secs, 30);
    assert_eq!(parsed.webhook.source_tag, "video_report_generator");
    assert!(parsed.wizard.lock_back_while_submitting);
}

#[test]
fn saved_config_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config {
        config_path: dir.path().join("config.toml"),
        ..Config::default()
    };
    config.webhook.url = "https://hooks.example.com/catch/9".into();
    config.webhook.timeout_secs = 12;
    config.save().unwrap();

    let raw = std::fs::read_to_string(&config.config_path).unwrap();
    let mut reloaded: Config = toml::from_str(&raw).unwrap();
    reloaded.config_path.clone_from(&config.config_path);
    assert_eq!(reloaded, config);
}

#[test]
fn non_http_webhook_is_rejected() {
    let mut config = Config::default();
    config.webhook.url = "mailto:reports@example.com".into();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}
