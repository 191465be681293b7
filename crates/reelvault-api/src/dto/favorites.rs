//! Favorites DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use reelvault_db::{DbFavorite, NewFavorite};

/// Save favorite request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveFavoriteRequest {
    /// Movie title, matched against the catalog title
    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: String,
    /// Genre
    #[validate(length(min = 1, max = 100, message = "Genre must be 1-100 characters"))]
    pub genre: String,
    /// Release year
    #[validate(range(min = 1878, max = 2100, message = "Year out of range"))]
    pub year: i32,
    /// IMDb identifier, e.g. tt3896198
    #[validate(length(min = 2, max = 20, message = "Invalid IMDb ID"))]
    pub imdb_id: String,
    /// Personal rating
    #[validate(range(min = 1, max = 10, message = "Rating must be 1-10"))]
    pub user_rating: i32,
}

impl From<SaveFavoriteRequest> for NewFavorite {
    fn from(req: SaveFavoriteRequest) -> Self {
        Self {
            title: req.title,
            genre: req.genre,
            year: req.year,
            imdb_id: req.imdb_id,
            user_rating: req.user_rating,
        }
    }
}

/// Stored favorite
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    /// Favorite ID
    pub id: String,
    /// Movie title
    pub title: String,
    /// Genre
    pub genre: String,
    /// Release year
    pub year: i32,
    /// IMDb identifier
    pub imdb_id: String,
    /// Personal rating
    pub user_rating: i32,
}

impl From<DbFavorite> for FavoriteResponse {
    fn from(row: DbFavorite) -> Self {
        Self {
            id: row.id.to_string(),
            title: row.title,
            genre: row.genre,
            year: row.year,
            imdb_id: row.imdb_id,
            user_rating: row.user_rating,
        }
    }
}
