//! Settings that only exist in an env file reach the config, including the
//! log format consumed by `init_tracing`.

use std::fs;
use std::time::Duration;

use tempfile::tempdir;
use tolawatch_cli::config::{Config, LogFormat};

#[test]
fn env_file_settings_are_loaded_before_config_is_read() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("tolawatch.env");
    fs::write(
        &path,
        "TOLAWATCH_LOG_FORMAT=json\nTOLAWATCH_INTERVAL_SECS=120\nGOLD_API_KEY_ENVFILE=envf-1234-5678\n",
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();

    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.interval, Duration::from_secs(120));
    assert!(config
        .credentials
        .entries
        .iter()
        .any(|(name, _)| name == "GOLD_API_KEY_ENVFILE"));
}

#[test]
fn missing_env_file_is_an_error() {
    let tmp = tempdir().unwrap();
    assert!(Config::load(Some(&tmp.path().join("absent.env"))).is_err());
}
