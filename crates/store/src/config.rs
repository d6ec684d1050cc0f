//! Configuration for the document store client.
//!
//! Supports environment-based configuration with sensible defaults.

use roadwatch_reports::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default hosted document store endpoint
const DEFAULT_BASE_URL: &str = "https://api.jsonbin.io/v3";

/// Store client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the document store API
    pub base_url: String,
    /// Identifier of the bin holding the report document
    pub bin_id: String,
    /// Static access key sent with every request
    pub master_key: String,
    /// Transport timeout; nothing above the transport enforces its own
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl StoreConfig {
    /// Creates a configuration for the default hosted endpoint.
    pub fn new(bin_id: impl Into<String>, master_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            bin_id: bin_id.into(),
            master_key: master_key.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Creates a configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `ROADWATCH_BIN_ID`: bin identifier (required)
    /// - `ROADWATCH_MASTER_KEY`: access key (required)
    /// - `ROADWATCH_STORE_URL`: base URL (optional, hosted endpoint by default)
    /// - `ROADWATCH_TIMEOUT_SECS`: transport timeout in seconds (optional)
    pub fn from_env() -> StoreResult<Self> {
        let bin_id =
            env::var("ROADWATCH_BIN_ID").map_err(|_| StoreError::missing_env("ROADWATCH_BIN_ID"))?;
        let master_key = env::var("ROADWATCH_MASTER_KEY")
            .map_err(|_| StoreError::missing_env("ROADWATCH_MASTER_KEY"))?;

        let base_url =
            env::var("ROADWATCH_STORE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = env::var("ROADWATCH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Ok(Self {
            base_url,
            bin_id,
            master_key,
            timeout,
        })
    }

    /// Builder-style method to set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> StoreResult<()> {
        if self.base_url.is_empty() {
            return Err(StoreError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(StoreError::config(
                "base_url must start with http:// or https://",
            ));
        }

        if self.bin_id.is_empty() {
            return Err(StoreError::config("bin_id cannot be empty"));
        }

        if self.timeout.is_zero() {
            return Err(StoreError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_hosted_endpoint() {
        let config = StoreConfig::new("abc123", "key");
        assert!(config.base_url.contains("jsonbin.io"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = StoreConfig::new("abc123", "key")
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validation() {
        let valid = StoreConfig::new("abc123", "key");
        assert!(valid.validate().is_ok());

        let bad_url = StoreConfig::new("abc123", "key").with_base_url("ftp://nope");
        assert!(bad_url.validate().is_err());

        let no_bin = StoreConfig::new("", "key");
        assert!(no_bin.validate().is_err());

        let no_timeout = StoreConfig::new("abc123", "key").with_timeout(Duration::ZERO);
        assert!(no_timeout.validate().is_err());
    }
}
