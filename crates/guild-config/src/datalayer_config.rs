use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATALAYER_URL, DEFAULT_STORE_ID, DEFAULT_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Where the data layer proxy lives and which store holds the profiles
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataLayerConfig {
    /// Base URL of the proxy, e.g. `http://127.0.0.1:3000`
    pub base_url: String,
    /// Store identifier sent as `id` with every call
    pub store_id: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for DataLayerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DATALAYER_URL.to_string(),
            store_id: DEFAULT_STORE_ID.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DataLayerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::datalayer(format!(
                "datalayer.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.store_id.is_empty() {
            return Err(ConfigError::datalayer("datalayer.store_id cannot be empty"));
        }

        if !self.store_id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::datalayer(format!(
                "datalayer.store_id must be hexadecimal, got '{}'",
                self.store_id
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::datalayer(format!(
                "datalayer.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
