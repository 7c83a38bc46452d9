//! HTTP client for a hosted lead dataset.
//!
//! The dataset is published as two static files next to each other: a light
//! variant with the fields the explorer needs, and the full export. The
//! light file is preferred; the full one is only fetched when the light one
//! is missing or unreadable.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::IngestError;

pub const LIGHT_DATASET_FILE: &str = "prospects-data-light.json";
pub const FULL_DATASET_FILE: &str = "prospects-data.json";

/// Which of the two published files answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetVariant {
    Light,
    Full,
}

impl DatasetVariant {
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            DatasetVariant::Light => LIGHT_DATASET_FILE,
            DatasetVariant::Full => FULL_DATASET_FILE,
        }
    }
}

impl fmt::Display for DatasetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetVariant::Light => f.write_str("light"),
            DatasetVariant::Full => f.write_str("full"),
        }
    }
}

/// A fetched dataset. `records` is returned unvalidated.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub variant: DatasetVariant,
    pub records: serde_json::Value,
}

/// Client for the hosted dataset files.
pub struct DatasetClient {
    client: Client,
    base_url: Url,
}

impl DatasetClient {
    /// Creates a client reading the dataset files under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`IngestError::InvalidUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // A trailing slash makes `Url::join` append instead of replacing the
        // last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| IngestError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches the light dataset, falling back to the full one.
    ///
    /// # Errors
    ///
    /// Errors from the light file are logged and trigger the fallback; only
    /// the full file's errors are returned:
    /// - [`IngestError::Status`] on a non-2xx response.
    /// - [`IngestError::Http`] on network failure.
    /// - [`IngestError::Json`] if the body is not valid JSON.
    pub async fn fetch_dataset(&self) -> Result<Dataset, IngestError> {
        match self.fetch_variant(DatasetVariant::Light).await {
            Ok(dataset) => return Ok(dataset),
            Err(e) => {
                tracing::warn!(error = %e, "light dataset unavailable; falling back to full dataset");
            }
        }
        self.fetch_variant(DatasetVariant::Full).await
    }

    /// Fetches one specific variant, without fallback.
    ///
    /// # Errors
    ///
    /// Same as [`DatasetClient::fetch_dataset`].
    pub async fn fetch_variant(&self, variant: DatasetVariant) -> Result<Dataset, IngestError> {
        let url = self
            .base_url
            .join(variant.file_name())
            .map_err(|e| IngestError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let records = serde_json::from_str(&body).map_err(|e| IngestError::Json {
            context: url.to_string(),
            source: e,
        })?;

        tracing::info!(%variant, url = %url, "fetched lead dataset");
        Ok(Dataset { variant, records })
    }
}
