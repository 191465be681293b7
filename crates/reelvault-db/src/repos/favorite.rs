//! Favorites repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::store::{FavoriteStore, NewFavorite};
use crate::{DbFavorite, DbResult};

/// Favorites repository backed by the `favorites` table
pub struct FavoriteRepo {
    pool: PgPool,
}

impl FavoriteRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteStore for FavoriteRepo {
    async fn insert(&self, favorite: NewFavorite) -> DbResult<DbFavorite> {
        let row = sqlx::query_as::<_, DbFavorite>(
            r#"
            INSERT INTO favorites (title, genre, year, imdb_id, user_rating)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, genre, year, imdb_id, user_rating, created_at
            "#,
        )
        .bind(&favorite.title)
        .bind(&favorite.genre)
        .bind(favorite.year)
        .bind(&favorite.imdb_id)
        .bind(favorite.user_rating)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_all(&self) -> DbResult<Vec<DbFavorite>> {
        let rows = sqlx::query_as::<_, DbFavorite>(
            r#"
            SELECT id, title, genre, year, imdb_id, user_rating, created_at
            FROM favorites
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn top_rated(&self, limit: i64) -> DbResult<Vec<DbFavorite>> {
        let rows = sqlx::query_as::<_, DbFavorite>(
            r#"
            SELECT id, title, genre, year, imdb_id, user_rating, created_at
            FROM favorites
            ORDER BY user_rating DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
