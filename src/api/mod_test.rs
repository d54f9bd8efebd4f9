use super::*;
use crate::test_support::capture_logs;
use serial_test::serial;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

const ALL_VARS: [&str; 6] = [
    HOST_ENV,
    PORT_ENV,
    UPSTREAM_URL_ENV,
    TIMEOUT_ENV,
    USERINFO_URL_ENV,
    AUTH_DISABLED_ENV,
];

fn clear_env() {
    for var in ALL_VARS {
        unsafe {
            env::remove_var(var);
        }
    }
}

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, 8080);
    assert_eq!(config.upstream_url, "https://api.squiggle.com.au/");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.userinfo_url, "https://graph.microsoft.com/v1.0/me");
    assert!(!config.auth_disabled);
}

#[test]
#[serial]
fn test_config_new_without_env_matches_default() {
    clear_env();
    assert_eq!(Config::new(), Config::default());
}

#[test]
#[serial]
fn test_config_new_respects_env_vars() {
    clear_env();
    unsafe {
        env::set_var(HOST_ENV, "127.0.0.1");
        env::set_var(PORT_ENV, "9090");
        env::set_var(UPSTREAM_URL_ENV, "http://localhost:4000/");
        env::set_var(TIMEOUT_ENV, "5");
        env::set_var(USERINFO_URL_ENV, "https://id.example/userinfo");
        env::set_var(AUTH_DISABLED_ENV, "true");
    }

    let config = Config::new();

    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.port, 9090);
    assert_eq!(config.upstream_url, "http://localhost:4000/");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.userinfo_url, "https://id.example/userinfo");
    assert!(config.auth_disabled);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_values_keep_defaults() {
    clear_env();
    unsafe {
        env::set_var(PORT_ENV, "80a");
        env::set_var(TIMEOUT_ENV, "-3");
        env::set_var(HOST_ENV, "somewhere");
        env::set_var(AUTH_DISABLED_ENV, "maybe");
    }
    let logs = capture_logs();

    let config = Config::new();

    assert_eq!(config, Config::default());
    for var in [PORT_ENV, TIMEOUT_ENV, HOST_ENV, AUTH_DISABLED_ENV] {
        let expected = format!("Ignoring invalid value for {var}");
        assert!(logs.has("WARN", &expected), "no warning for {var}");
    }

    clear_env();
}

#[test]
#[serial]
fn test_auth_disabled_env_values() {
    for (raw, expected) in [
        ("1", true),
        ("true", true),
        ("YES", true),
        ("on", true),
        ("0", false),
        ("false", false),
        ("no", false),
        ("off", false),
    ] {
        clear_env();
        unsafe {
            env::set_var(AUTH_DISABLED_ENV, raw);
        }

        assert_eq!(Config::new().auth_disabled, expected, "value {raw:?}");
    }

    clear_env();
}

#[test]
#[serial]
fn test_config_builder_overrides_env_var() {
    clear_env();
    unsafe {
        env::set_var(PORT_ENV, "9090");
        env::set_var(AUTH_DISABLED_ENV, "1");
    }

    // Builder (CLI flags) should override env vars
    let config = Config::new().with_port(7000).with_auth_disabled(false);

    assert_eq!(config.port, 7000);
    assert!(!config.auth_disabled);

    clear_env();
}

#[test]
fn test_builder_methods() {
    let config = Config::default()
        .with_host(IpAddr::V4(Ipv4Addr::LOCALHOST))
        .with_upstream_url("http://mock/")
        .with_timeout(Duration::from_millis(250))
        .with_userinfo_url("http://id/");

    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.upstream_url, "http://mock/");
    assert_eq!(config.timeout, Duration::from_millis(250));
    assert_eq!(config.userinfo_url, "http://id/");
}

#[test]
fn test_build_context_with_auth_disabled() {
    crate::test_support::init_crypto();
    let config = Config::default().with_auth_disabled(true);

    assert!(build_context(&config).is_ok());
}
