//! Catalog error types

use thiserror::Error;

/// Catalog client errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Missing base URL or API key; raised before any network call
    #[error("Catalog client misconfigured: {0}")]
    Misconfigured(String),

    /// Upstream answered with a non-success HTTP status
    #[error("Catalog upstream returned status {status}")]
    Upstream { status: u16 },

    /// Transport failure (connect, timeout, malformed body)
    #[error("Catalog request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// Favorite validation outcomes that block a commit
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The catalog has no entry for the submitted IMDb ID
    #[error("No catalog entry for the given IMDb ID")]
    NotFound,

    /// The submitted title does not match the catalog title
    #[error("Title '{submitted}' does not match catalog title '{catalog}'")]
    TitleMismatch { submitted: String, catalog: String },

    /// The catalog could not be reached; nothing is committed
    #[error(transparent)]
    Upstream(#[from] CatalogError),
}
