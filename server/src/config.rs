//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the FAQ backend, without a trailing `/`.
    pub backend_url: String,
    pub timeouts: BackendTimeouts,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FAQ_BACKEND_URL`: default `http://127.0.0.1:5000`
    /// - `FAQ_BACKEND_TIMEOUT_SECS`: default 30
    /// - `FAQ_BACKEND_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let backend_url = parse_backend_url(lookup("FAQ_BACKEND_URL"))?;
        let timeouts = BackendTimeouts {
            request_secs: parse_or(
                "FAQ_BACKEND_TIMEOUT_SECS",
                lookup("FAQ_BACKEND_TIMEOUT_SECS"),
                DEFAULT_BACKEND_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                "FAQ_BACKEND_CONNECT_TIMEOUT_SECS",
                lookup("FAQ_BACKEND_CONNECT_TIMEOUT_SECS"),
                DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { port, backend_url, timeouts })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn parse_backend_url(raw: Option<String>) -> Result<String, ConfigError> {
    let Some(value) = raw else {
        return Ok(DEFAULT_BACKEND_URL.to_owned());
    };
    let url = value.trim().trim_end_matches('/');
    let has_host = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty());
    if !has_host {
        return Err(ConfigError::Invalid { var: "FAQ_BACKEND_URL", value });
    }
    Ok(url.to_owned())
}
