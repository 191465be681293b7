//! Store models - mapped from PostgreSQL tables
//!
//! Rows are decoded into these typed structs at the store boundary; a missing
//! or malformed column fails the query instead of defaulting silently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ============================================================================
// User Models
// ============================================================================

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DbUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Favorite Models
// ============================================================================

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DbFavorite {
    pub id: Uuid,
    pub title: String,
    pub genre: String,
    pub year: i32,
    pub imdb_id: String,
    pub user_rating: i32,
    pub created_at: DateTime<Utc>,
}
