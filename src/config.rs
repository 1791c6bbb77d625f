//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_API: &str = "http://127.0.0.1:8080/api";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("SHOWROOM_UPSTREAM_API must be an http(s) URL, got {0:?}")]
    UpstreamScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Vehicle/appointment service base, without a trailing slash.
    pub upstream_api: String,
    pub upstream_timeout: Duration,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SHOWROOM_UPSTREAM_API`: default `http://127.0.0.1:8080/api`
    /// - `SHOWROOM_UPSTREAM_TIMEOUT_SECS`: default 15
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let timeout_secs = parse_or(
            "SHOWROOM_UPSTREAM_TIMEOUT_SECS",
            lookup("SHOWROOM_UPSTREAM_TIMEOUT_SECS"),
            DEFAULT_UPSTREAM_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "SHOWROOM_UPSTREAM_TIMEOUT_SECS", value: "0".into() });
        }

        let upstream_api = lookup("SHOWROOM_UPSTREAM_API")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_API.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !(upstream_api.starts_with("http://") || upstream_api.starts_with("https://")) {
            return Err(ConfigError::UpstreamScheme(upstream_api));
        }

        Ok(Self { port, upstream_api, upstream_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: value.to_owned() }),
    }
}
