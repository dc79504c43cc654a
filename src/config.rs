//! Client configuration.
//!
//! Defaults are usable against a local API. Environment variables override
//! individual fields:
//!
//! | Variable | Field |
//! |---|---|
//! | `PRINTLENS_API_BASE_URL` | `base_url` |
//! | `PRINTLENS_CREDENTIAL_KEY` | `credential_key` |
//! | `PRINTLENS_TIMEOUT_SECS` | `timeout_secs` |
//! | `PRINTLENS_UNKNOWN_JOB_LABEL` | `unknown_job_label` |

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::normalization::context::UNKNOWN_JOB_NO;

pub const ENV_BASE_URL: &str = "PRINTLENS_API_BASE_URL";
pub const ENV_CREDENTIAL_KEY: &str = "PRINTLENS_CREDENTIAL_KEY";
pub const ENV_TIMEOUT_SECS: &str = "PRINTLENS_TIMEOUT_SECS";
pub const ENV_UNKNOWN_JOB_LABEL: &str = "PRINTLENS_UNKNOWN_JOB_LABEL";

/// Storage key the access token is kept under.
pub const DEFAULT_CREDENTIAL_KEY: &str = "accessToken";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root, e.g. `https://api.example.com/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_credential_key")]
    pub credential_key: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Job number given to unfiltered records that carry none.
    #[serde(default = "default_unknown_job_label")]
    pub unknown_job_label: String,
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_credential_key() -> String {
    DEFAULT_CREDENTIAL_KEY.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_unknown_job_label() -> String {
    UNKNOWN_JOB_NO.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            credential_key: default_credential_key(),
            timeout_secs: default_timeout_secs(),
            unknown_job_label: default_unknown_job_label(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden through an arbitrary variable lookup.
    ///
    /// Blank values are ignored. An unparsable timeout keeps the default and
    /// logs a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Some(key) = get(ENV_CREDENTIAL_KEY) {
            config.credential_key = key;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            match raw.parse() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => log::warn!(
                    "CONFIG_INVALID var={} value={:?} using={}",
                    ENV_TIMEOUT_SECS,
                    raw,
                    config.timeout_secs
                ),
            }
        }
        if let Some(label) = get(ENV_UNKNOWN_JOB_LABEL) {
            config.unknown_job_label = label;
        }

        config
    }

    pub fn with_credential_key(mut self, key: impl Into<String>) -> Self {
        self.credential_key = key.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.credential_key, "accessToken");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.unknown_job_label, "Unknown");
    }

    #[test]
    fn test_lookup_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_BASE_URL, "https://printing.example.com/api"),
            (ENV_CREDENTIAL_KEY, "  "),
            (ENV_TIMEOUT_SECS, "5"),
        ]);
        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.base_url, "https://printing.example.com/api");
        assert_eq!(config.credential_key, "accessToken");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_bad_timeout_keeps_default() {
        let config = ClientConfig::from_lookup(|k| {
            (k == ENV_TIMEOUT_SECS).then(|| "soon".to_string())
        });
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://10.0.0.5/api"}"#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5/api");
        assert_eq!(config.timeout_secs, 30);
    }
}
