use pistats_domain::{CliOverrides, Config, ConfigError};
use std::io::Write;

// ============================================================================
// Tests for Config loading
// ============================================================================

#[test]
fn test_empty_file_yields_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config.refresh.interval_minutes, 30);
    assert!(config.refresh.auto_rotate);
    assert_eq!(config.display.spi_device, "/dev/spidev0.1");
    assert_eq!(config.pihole.setup_vars_path, "/etc/pihole/setupVars.conf");
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let config = Config::from_toml(
        r#"
        [pihole]
        host = "10.0.0.2"

        [refresh]
        interval_minutes = 5
        "#,
    )
    .unwrap();

    assert_eq!(config.pihole.host.as_deref(), Some("10.0.0.2"));
    assert_eq!(config.pihole.timeout_secs, 10);
    assert_eq!(config.refresh.interval_minutes, 5);
    assert!(config.refresh.auto_rotate);
}

#[test]
fn test_load_from_file_applies_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[refresh]\ninterval_minutes = 60\n[logging]\nlevel = \"warn\"").unwrap();

    let overrides = CliOverrides {
        interval_minutes: Some(0),
        no_rotate: true,
        spi_device: Some("/dev/spidev0.0".to_string()),
        log_level: None,
    };
    let config = Config::load(Some(file.path().to_str().unwrap()), overrides).unwrap();

    assert_eq!(config.refresh.interval_minutes, 0);
    assert!(!config.refresh.auto_rotate);
    assert_eq!(config.display.spi_device, "/dev/spidev0.0");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let result = Config::load(Some("/nonexistent/pistats.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_malformed_toml_reports_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[refresh\ninterval_minutes = ").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    match Config::from_file(&path) {
        Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = Config::default();
    config.display.hardware_address = 8;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.display.poll_interval_ms = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.display.debounce_ms = 5;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}
