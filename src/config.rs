//! Runtime configuration, read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `QKART_ENDPOINT` | unset | API root of a remote backend; unset runs the in-memory one |
//! | `QKART_TIMEOUT_MS` | `10000` | Per-request timeout for the HTTP client |

use std::env;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub const ENDPOINT_VAR: &str = "QKART_ENDPOINT";
pub const TIMEOUT_VAR: &str = "QKART_TIMEOUT_MS";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub endpoint: Option<String>,
    pub timeout: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint = lookup(ENDPOINT_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        match &endpoint {
            Some(endpoint) => info!(%endpoint, "Using remote backend"),
            None => info!("{ENDPOINT_VAR} not set, using in-memory backend"),
        }

        let timeout_ms = match lookup(TIMEOUT_VAR) {
            Some(raw) => parse_timeout(&raw)?,
            None => {
                info!("{TIMEOUT_VAR} not set, using default: {DEFAULT_TIMEOUT_MS}");
                DEFAULT_TIMEOUT_MS
            }
        };

        Ok(Self {
            endpoint,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

/// A positive number of milliseconds; zero would fail every request at once.
fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key: TIMEOUT_VAR,
        value: raw.to_string(),
        reason,
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(invalid("timeout must be greater than zero".to_string())),
        Ok(ms) => Ok(ms),
        Err(e) => Err(invalid(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_reads_endpoint_and_timeout() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            (ENDPOINT_VAR, "http://localhost:8082/api/v1"),
            (TIMEOUT_VAR, "2500"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8082/api/v1"));
        assert_eq!(config.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_blank_endpoint_means_in_memory() {
        let config = StorefrontConfig::from_lookup(lookup(&[(ENDPOINT_VAR, "  ")])).unwrap();
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        let err = StorefrontConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: TIMEOUT_VAR, .. }));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = StorefrontConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "0")])).unwrap_err();
        match err {
            ConfigError::Invalid { key, value, .. } => {
                assert_eq!(key, TIMEOUT_VAR);
                assert_eq!(value, "0");
            }
        }
    }
}
