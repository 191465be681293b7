//! In-memory store doubles
//!
//! Trait-compatible replacements for the PostgreSQL repositories, used by unit
//! and integration tests. `MemoryUserStore` enforces the same case-insensitive
//! email uniqueness as the real unique index so the duplicate-registration
//! path behaves identically.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{FavoriteStore, NewFavorite, NewUser, UserStore};
use crate::{DbError, DbFavorite, DbResult, DbUser};

/// In-memory `users` collection
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<DbUser>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: NewUser) -> DbResult<DbUser> {
        let mut users = self.users.write().await;

        if users
            .iter()
            .any(|u| u.email.to_lowercase() == user.email.to_lowercase())
        {
            return Err(DbError::Duplicate(format!(
                "Email {} already exists",
                user.email
            )));
        }

        let row = DbUser {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.push(row.clone());

        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<DbUser>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.email.to_lowercase() == email.to_lowercase())
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<DbUser>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}

/// In-memory `favorites` collection
#[derive(Default)]
pub struct MemoryFavoriteStore {
    favorites: RwLock<Vec<DbFavorite>>,
}

impl MemoryFavoriteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoriteStore for MemoryFavoriteStore {
    async fn insert(&self, favorite: NewFavorite) -> DbResult<DbFavorite> {
        let row = DbFavorite {
            id: Uuid::new_v4(),
            title: favorite.title,
            genre: favorite.genre,
            year: favorite.year,
            imdb_id: favorite.imdb_id,
            user_rating: favorite.user_rating,
            created_at: Utc::now(),
        };

        self.favorites.write().await.push(row.clone());

        Ok(row)
    }

    async fn list_all(&self) -> DbResult<Vec<DbFavorite>> {
        Ok(self.favorites.read().await.clone())
    }

    async fn top_rated(&self, limit: i64) -> DbResult<Vec<DbFavorite>> {
        let mut rows = self.favorites.read().await.clone();
        // Stable sort keeps insertion order for rating ties, like the index scan
        rows.sort_by(|a, b| b.user_rating.cmp(&a.user_rating));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }
}
