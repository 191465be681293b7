//! Favorites error types

use thiserror::Error;

use reelvault_catalog::ValidationError;

/// Favorites flow errors
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// The candidate failed catalog validation; nothing was stored
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store rejected the operation after validation passed
    #[error("Store error: {0}")]
    Store(String),
}

impl From<reelvault_db::DbError> for FavoritesError {
    fn from(err: reelvault_db::DbError) -> Self {
        Self::Store(err.to_string())
    }
}

/// Result type for favorites operations
pub type FavoritesResult<T> = Result<T, FavoritesError>;
