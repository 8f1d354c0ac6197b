//! # Client Configuration
//!
//! Tunables shared by the backends. Every field has a default, so an empty JSON object or
//! an empty environment yields [`ClientConfig::default`].
//!
//! | Field | Env variable | Default |
//! |-------|--------------|---------|
//! | `fetch_timeout_ms` | `DAL_FETCH_TIMEOUT_MS` | 5000 |
//! | `store_buffer` | `DAL_STORE_BUFFER` | 32 |

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const ENV_FETCH_TIMEOUT_MS: &str = "DAL_FETCH_TIMEOUT_MS";
pub const ENV_STORE_BUFFER: &str = "DAL_STORE_BUFFER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Upper bound on one transport call, in milliseconds.
    pub fetch_timeout_ms: u64,
    /// Channel capacity of the in-memory store.
    pub store_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: 5000,
            store_buffer: 32,
        }
    }
}

impl ClientConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`; keys it does not know keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_FETCH_TIMEOUT_MS) {
            config.fetch_timeout_ms = parse(ENV_FETCH_TIMEOUT_MS, value)?;
        }
        if let Some(value) = lookup(ENV_STORE_BUFFER) {
            config.store_buffer = parse(ENV_STORE_BUFFER, value)?;
        }
        config.validate()
    }

    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.fetch_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "fetch_timeout_ms",
                value: "0".to_string(),
            });
        }
        if self.store_buffer == 0 {
            return Err(ConfigError::InvalidValue {
                key: "store_buffer",
                value: "0".to_string(),
            });
        }
        Ok(self)
    }
}

fn parse<V: std::str::FromStr>(key: &'static str, value: String) -> Result<V, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
