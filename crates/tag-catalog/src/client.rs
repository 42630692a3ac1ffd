//! HTTP client for the inventory catalog endpoint.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::{debug, info, info_span};

use tag_model::CatalogEntry;

use crate::decode::decode_catalog;
use crate::error::{CatalogError, Result};
use crate::source::CatalogSource;

/// Client for the product catalog API.
pub struct CatalogClient {
    client: Client,
    url: String,
}

impl CatalogClient {
    /// Create a client for `url`. A `timeout` of `None` disables the request
    /// timeout entirely.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CatalogError::Client)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetch and decode the full product list. One request, no retry.
    pub fn fetch(&self) -> Result<Vec<CatalogEntry>> {
        debug!(url = %self.url, "fetching catalog");

        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, format!("tagger/{}", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|source| CatalogError::Request {
                url: self.url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(CatalogError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().map_err(|source| CatalogError::Request {
            url: self.url.clone(),
            source,
        })?;
        decode_catalog(&body)
    }
}

/// Load the catalog from `source`.
pub fn load_catalog(source: &CatalogSource) -> Result<Vec<CatalogEntry>> {
    let span = info_span!("catalog", source = %source);
    let _guard = span.enter();
    let start = Instant::now();

    let entries = match source {
        CatalogSource::Http { url, timeout } => CatalogClient::new(url.clone(), *timeout)?.fetch()?,
        CatalogSource::File(path) => {
            let bytes = std::fs::read(path).map_err(|source| CatalogError::FileRead {
                path: path.clone(),
                source,
            })?;
            decode_catalog(&bytes)?
        }
    };

    info!(
        entry_count = entries.len(),
        duration_ms = start.elapsed().as_millis(),
        "catalog loaded"
    );
    Ok(entries)
}
