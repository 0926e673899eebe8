//! Catalog configuration passed in by the host.

use std::time::Duration;

use common::catalog_const::{DEBOUNCE_MS, DEFAULT_DATASET_PATH};
use reqwest::Url;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Absolute URL, or a path resolved against `base_url`.
    pub dataset_url: String,
    pub base_url: Option<String>,
    pub debounce_ms: u64,
    /// Request timeout for the dataset fetch. Ignored on wasm targets.
    pub fetch_timeout_ms: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_PATH.to_string(),
            base_url: None,
            debounce_ms: DEBOUNCE_MS,
            fetch_timeout_ms: None,
        }
    }
}

impl CatalogConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: Some(base_url.into()), ..Self::default() }
    }

    /// Where to fetch the dataset from, or `None` when the configured path is
    /// relative and there is no usable base to resolve it against.
    pub fn dataset_location(&self) -> Option<Url> {
        let dataset_url = self.dataset_url.trim();
        if dataset_url.is_empty() {
            return None;
        }
        if let Ok(url) = Url::parse(dataset_url) {
            return Some(url);
        }
        let base = Url::parse(self.base_url.as_deref()?.trim()).ok()?;
        base.join(dataset_url).ok()
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_ms.map(Duration::from_millis)
    }
}
