use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "ORDEXT_ENV"));
}

#[test]
fn build_app_config_applies_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let config = build_app_config(lookup_from_map(&map)).unwrap();

    assert_eq!(config.env, Environment::Development);
    assert_eq!(config.log_level, "info");
    assert!(config.vendors_path.is_none());
    assert_eq!(config.mailbox_dir, PathBuf::from("./mailbox"));
    assert_eq!(config.max_messages_per_run, 5);
    assert_eq!(config.account_id, "default");
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("ORDEXT_ENV", "production");
    map.insert("ORDEXT_LOG_LEVEL", "debug");
    map.insert("ORDEXT_VENDORS_PATH", "./config/vendors.yaml");
    map.insert("ORDEXT_MAILBOX_DIR", "/var/mail/fixtures");
    map.insert("ORDEXT_MAX_MESSAGES_PER_RUN", "25");
    map.insert("ORDEXT_ACCOUNT_ID", "acct-42");

    let config = build_app_config(lookup_from_map(&map)).unwrap();

    assert_eq!(config.env, Environment::Production);
    assert_eq!(config.log_level, "debug");
    assert_eq!(
        config.vendors_path,
        Some(PathBuf::from("./config/vendors.yaml"))
    );
    assert_eq!(config.mailbox_dir, PathBuf::from("/var/mail/fixtures"));
    assert_eq!(config.max_messages_per_run, 25);
    assert_eq!(config.account_id, "acct-42");
}

#[test]
fn build_app_config_fails_on_invalid_env() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("ORDEXT_ENV", "staging");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ORDEXT_ENV"),
        "expected InvalidEnvVar(ORDEXT_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_invalid_max_messages() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("ORDEXT_MAX_MESSAGES_PER_RUN", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ORDEXT_MAX_MESSAGES_PER_RUN"),
        "expected InvalidEnvVar(ORDEXT_MAX_MESSAGES_PER_RUN), got: {result:?}"
    );
}
