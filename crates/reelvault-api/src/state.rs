//! Application state shared across handlers
//!
//! Holds the composed services; handlers never touch the store or the catalog
//! directly. Everything here is an explicitly constructed, injected dependency
//! so tests can swap in doubles.

use std::sync::Arc;

use reelvault_auth::AuthService;
use reelvault_catalog::CatalogLookup;
use reelvault_favorites::FavoritesService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Registration and login flows
    pub auth: Arc<AuthService>,
    /// Catalog-gated favorites flows
    pub favorites: Arc<FavoritesService>,
    /// Direct catalog lookups for the search endpoint
    pub catalog: Arc<dyn CatalogLookup>,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        auth: Arc<AuthService>,
        favorites: Arc<FavoritesService>,
        catalog: Arc<dyn CatalogLookup>,
    ) -> Self {
        Self {
            auth,
            favorites,
            catalog,
        }
    }
}
