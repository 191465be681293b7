//! Catalog search DTOs

use serde::Serialize;
use utoipa::ToSchema;

use reelvault_catalog::CatalogEntry;

/// Catalog search result
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    /// Movie title as reported by the catalog
    pub title: String,
    /// Release year (upstream string form)
    pub year: String,
    /// Genre
    pub genre: String,
    /// IMDb identifier
    pub imdb_id: String,
}

impl From<CatalogEntry> for MovieResponse {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            title: entry.title,
            year: entry.year,
            genre: entry.genre,
            imdb_id: entry.imdb_id,
        }
    }
}
