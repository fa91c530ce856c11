use std::collections::HashMap;

use super::*;

fn config_from(vars: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    HostConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(
        cfg.timeouts,
        BackendTimeouts {
            request_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
            connect_secs: DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
        }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("FAQ_BACKEND_URL", "https://faq.example.test/bot/"),
        ("FAQ_BACKEND_TIMEOUT_SECS", "12"),
        ("FAQ_BACKEND_CONNECT_TIMEOUT_SECS", " 2 "),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://faq.example.test/bot");
    assert_eq!(cfg.timeouts, BackendTimeouts { request_secs: 12, connect_secs: 2 });
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn from_lookup_rejects_port_out_of_range() {
    assert!(config_from(&[("PORT", "70000")]).is_err());
}

#[test]
fn from_lookup_rejects_invalid_timeout() {
    let err = config_from(&[("FAQ_BACKEND_TIMEOUT_SECS", "-1")]).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid { var: "FAQ_BACKEND_TIMEOUT_SECS", value: "-1".to_owned() }
    );
}

#[test]
fn from_lookup_rejects_backend_url_without_scheme() {
    let err = config_from(&[("FAQ_BACKEND_URL", "localhost:5000")]).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid { var: "FAQ_BACKEND_URL", value: "localhost:5000".to_owned() }
    );
}

#[test]
fn from_lookup_rejects_backend_url_without_host() {
    assert!(config_from(&[("FAQ_BACKEND_URL", "http://")]).is_err());
}
