//! Reelvault Favorites Service
//!
//! Save, list, and top-N flows over the favorites store. Saving is
//! verify-then-commit: the candidate goes through [`FavoriteValidator`] first
//! and only a validated candidate reaches the store, so a catalog miss or a
//! title mismatch never leaves a partial write behind.

pub mod error;

pub use error::{FavoritesError, FavoritesResult};

use std::sync::Arc;

use reelvault_catalog::FavoriteValidator;
use reelvault_db::{DbFavorite, FavoriteStore, NewFavorite};

/// Favorites service: validation-gated writes, reads in store order
pub struct FavoritesService {
    validator: FavoriteValidator,
    favorites: Arc<dyn FavoriteStore>,
}

impl FavoritesService {
    /// Create a new favorites service
    pub fn new(validator: FavoriteValidator, favorites: Arc<dyn FavoriteStore>) -> Self {
        Self {
            validator,
            favorites,
        }
    }

    /// Validate a candidate against the catalog, then store it
    pub async fn save_favorite(&self, candidate: NewFavorite) -> FavoritesResult<DbFavorite> {
        self.validator
            .validate(&candidate.imdb_id, &candidate.title)
            .await?;

        let favorite = self.favorites.insert(candidate).await?;

        tracing::info!(
            favorite_id = %favorite.id,
            imdb_id = %favorite.imdb_id,
            "Favorite saved"
        );

        Ok(favorite)
    }

    /// All stored favorites, store default order
    pub async fn list_favorites(&self) -> FavoritesResult<Vec<DbFavorite>> {
        Ok(self.favorites.list_all().await?)
    }

    /// Up to `n` favorites ordered by user rating descending
    pub async fn top_favorites(&self, n: i64) -> FavoritesResult<Vec<DbFavorite>> {
        Ok(self.favorites.top_rated(n).await?)
    }
}
