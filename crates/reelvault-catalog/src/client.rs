//! Catalog client
//!
//! One outbound HTTP GET per lookup, no retries, no caching. The upstream
//! speaks the OMDb query protocol: `t` for title search, `i` for IMDb ID,
//! `apikey` on every request.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::types::{CatalogEntry, LookupResponse};

/// Catalog lookup interface, mockable in tests
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Look up a catalog entry by title
    async fn lookup_by_title(&self, title: &str) -> Result<CatalogEntry, CatalogError>;

    /// Look up a catalog entry by IMDb ID
    async fn lookup_by_id(&self, imdb_id: &str) -> Result<CatalogEntry, CatalogError>;
}

/// HTTP client for the external movie catalog
#[derive(Clone)]
pub struct CatalogClient {
    config: CatalogConfig,
    client: Client,
}

impl CatalogClient {
    /// Create a new catalog client
    ///
    /// Validates the configuration first: a missing base URL or API key is an
    /// error here, before any network call.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CatalogError::Misconfigured(e.to_string()))?;

        Ok(Self { config, client })
    }

    async fn lookup(&self, param: (&str, &str)) -> Result<CatalogEntry, CatalogError> {
        let resp = self
            .client
            .get(&self.config.base_url)
            .query(&[param, ("apikey", self.config.api_key.as_str())])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(CatalogError::Upstream {
                status: resp.status().as_u16(),
            });
        }

        let raw: LookupResponse = resp.json().await?;
        Ok(CatalogEntry::from(raw))
    }
}

#[async_trait]
impl CatalogLookup for CatalogClient {
    async fn lookup_by_title(&self, title: &str) -> Result<CatalogEntry, CatalogError> {
        tracing::debug!(title = %title, "Catalog lookup by title");
        self.lookup(("t", title)).await
    }

    async fn lookup_by_id(&self, imdb_id: &str) -> Result<CatalogEntry, CatalogError> {
        tracing::debug!(imdb_id = %imdb_id, "Catalog lookup by IMDb ID");
        self.lookup(("i", imdb_id)).await
    }
}
