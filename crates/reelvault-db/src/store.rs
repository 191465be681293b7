//! Narrow store interfaces
//!
//! The services consume the document store through these traits so the real
//! PostgreSQL repositories and in-memory test doubles are interchangeable.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::{DbFavorite, DbUser};

/// Insert record for a new user account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Insert record for a validated favorite
#[derive(Debug, Clone)]
pub struct NewFavorite {
    pub title: String,
    pub genre: String,
    pub year: i32,
    pub imdb_id: String,
    pub user_rating: i32,
}

/// User account collection
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails with `DbError::Duplicate` when the email is
    /// already registered (unique index, case-insensitive).
    async fn create(&self, user: NewUser) -> DbResult<DbUser>;

    /// Find a user by email, case-insensitive
    async fn find_by_email(&self, email: &str) -> DbResult<Option<DbUser>>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<DbUser>>;
}

/// Favorites collection
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// Insert a validated favorite
    async fn insert(&self, favorite: NewFavorite) -> DbResult<DbFavorite>;

    /// All stored favorites, store default order
    async fn list_all(&self) -> DbResult<Vec<DbFavorite>>;

    /// Up to `limit` favorites ordered by user rating descending
    async fn top_rated(&self, limit: i64) -> DbResult<Vec<DbFavorite>>;
}
