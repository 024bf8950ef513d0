use permiso_cli::config::{Config, load_from_path, save_to_path};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_full_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    fs::write(
        &path,
        r#"
[api]
leave_url = "http://hr.example.com"
directory_url = "http://directory.example.com"

[leave]
hours_per_workday = 6

[state]
state_dir_override = "/tmp/permiso-test"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.api.leave_url, "http://hr.example.com");
    assert_eq!(config.api.directory_url, "http://directory.example.com");
    assert_eq!(config.leave.hours_per_workday, 6);
    assert!(config.state.state_dir_override.is_some());
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_config_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    fs::write(
        &path,
        r#"
[api]
leave_url = "http://hr.example.com"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.api.leave_url, "http://hr.example.com");
    assert_eq!(config.api.directory_url, "http://localhost:8762");
    assert_eq!(config.leave.hours_per_workday, 8);
}

#[test]
fn test_zero_workday_hours_fails_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    fs::write(
        &path,
        r#"
[leave]
hours_per_workday = 0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.leave.hours_per_workday = 7;
    save_to_path(&config, &path).unwrap();

    let reloaded = load_from_path(&path).unwrap();
    assert_eq!(reloaded.leave.hours_per_workday, 7);
    assert_eq!(reloaded.api.leave_url, config.api.leave_url);
}
