//! Section catalog served over HTTP by the steel beam API.
//!
//! The API exposes `GET {base}/beams`, returning every section as a JSON
//! array. Each call fetches a fresh snapshot; the timeout bounds the whole
//! request and there is no retry.

use std::time::Duration;

use calc_core::catalog::{parse_catalog_json, Section, SectionCatalog};
use calc_core::errors::{CalcError, CalcResult};
use reqwest::blocking::Client;

/// Remote catalog provider
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    client: Client,
}

impl HttpCatalog {
    /// Create a provider for the API at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> CalcResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CalcError::catalog_unavailable(&base_url, e.to_string()))?;
        Ok(HttpCatalog { base_url, client })
    }

    /// URL of the section listing endpoint
    pub fn beams_url(&self) -> String {
        format!("{}/beams", self.base_url)
    }

    fn fetch(&self) -> CalcResult<Vec<Section>> {
        let url = self.beams_url();
        log::debug!("Fetching catalog from {}", url);

        let unavailable = |e: reqwest::Error| CalcError::catalog_unavailable(&self.base_url, e.to_string());
        let body = self
            .client
            .get(&url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(unavailable)?;

        let sections = parse_catalog_json(&body).map_err(|e| {
            CalcError::catalog_unavailable(&self.base_url, format!("invalid catalog payload: {}", e))
        })?;
        log::debug!("Fetched {} sections from {}", sections.len(), url);
        Ok(sections)
    }
}

impl SectionCatalog for HttpCatalog {
    fn source_name(&self) -> String {
        self.base_url.clone()
    }

    fn list_sections(&self) -> CalcResult<Vec<Section>> {
        self.fetch().map_err(|e| {
            log::error!("Failed to fetch beams from API: {}", e);
            e
        })
    }
}
