//! JSONBin-style document store client.

use crate::config::StoreConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use roadwatch_reports::{Report, ReportStore, StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Access key header for the document store
const MASTER_KEY_HEADER: &str = "X-Master-Key";

/// The persisted document: the complete report collection under one field.
///
/// A write replaces this document wholesale; there is no partial update.
#[derive(Debug, Serialize, Deserialize)]
struct BinDocument {
    #[serde(default)]
    potholes: Vec<Report>,
}

/// Read envelope returned by the store (`GET .../latest`).
#[derive(Debug, Deserialize)]
struct BinEnvelope {
    #[serde(default)]
    record: Option<BinDocument>,
}

/// Report store backed by a hosted JSON bin.
#[derive(Clone)]
pub struct JsonBinStore {
    inner: Client,
    config: StoreConfig,
}

impl JsonBinStore {
    /// Creates a client with configuration from the environment.
    pub fn from_env() -> StoreResult<Self> {
        Self::with_config(StoreConfig::from_env()?)
    }

    /// Creates a client with a specific configuration.
    pub fn with_config(config: StoreConfig) -> StoreResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static("roadwatch-store/0.3"));
        let key = HeaderValue::from_str(&config.master_key)
            .map_err(|_| StoreError::config("master_key contains invalid header characters"))?;
        default_headers.insert(MASTER_KEY_HEADER, key);

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(StoreError::transport)?;

        Ok(Self { inner, config })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn read_url(&self) -> String {
        format!(
            "{}/b/{}/latest",
            self.config.base_url.trim_end_matches('/'),
            self.config.bin_id
        )
    }

    fn write_url(&self) -> String {
        format!(
            "{}/b/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.bin_id
        )
    }
}

#[async_trait]
impl ReportStore for JsonBinStore {
    /// Reads the whole document and returns the collection under its known
    /// field, defaulting to empty when the field is absent.
    #[instrument(skip(self))]
    async fn load(&self) -> StoreResult<Vec<Report>> {
        let response = self
            .inner
            .get(self.read_url())
            .send()
            .await
            .map_err(StoreError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::api(status.as_u16(), message));
        }

        let body = response.text().await.map_err(StoreError::transport)?;
        let envelope: BinEnvelope = serde_json::from_str(&body)?;
        let reports = envelope.record.map(|r| r.potholes).unwrap_or_default();

        debug!(count = reports.len(), "loaded report document");
        Ok(reports)
    }

    /// Replaces the persisted document with the given collection.
    #[instrument(skip(self, reports), fields(count = reports.len()))]
    async fn save(&self, reports: &[Report]) -> StoreResult<()> {
        let body = BinDocument {
            potholes: reports.to_vec(),
        };

        let response = self
            .inner
            .put(self.write_url())
            .json(&body)
            .send()
            .await
            .map_err(StoreError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::api(status.as_u16(), message));
        }

        debug!("replaced report document");
        Ok(())
    }
}
