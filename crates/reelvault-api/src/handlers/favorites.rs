//! Favorites handlers
//!
//! All routes require a verified access token. Saving delegates to the
//! favorites service, which validates against the catalog before the store
//! sees anything.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::dto::{FavoriteResponse, SaveFavoriteRequest};
use crate::error::{ApiError, ApiResult};
use crate::extractors::{AuthenticatedUser, ValidatedJson};
use crate::state::AppState;

/// Save a favorite movie
#[utoipa::path(
    post,
    path = "/api/v1/favorites",
    tag = "Favorites",
    request_body = SaveFavoriteRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Favorite saved", body = FavoriteResponse),
        (status = 400, description = "Title does not match the catalog"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Unknown IMDb ID"),
        (status = 502, description = "Catalog unavailable")
    )
)]
pub async fn save_favorite(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<SaveFavoriteRequest>,
) -> ApiResult<Json<FavoriteResponse>> {
    let favorite = state
        .favorites
        .save_favorite(request.into())
        .await
        .map_err(ApiError::from)?;

    tracing::info!(
        user_id = %user.user_id,
        favorite_id = %favorite.id,
        "Favorite saved via API"
    );

    Ok(Json(FavoriteResponse::from(favorite)))
}

/// List all favorites
#[utoipa::path(
    get,
    path = "/api/v1/favorites",
    tag = "Favorites",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Stored favorites", body = Vec<FavoriteResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
    _user: AuthenticatedUser,
) -> ApiResult<Json<Vec<FavoriteResponse>>> {
    let favorites = state
        .favorites
        .list_favorites()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(
        favorites.into_iter().map(FavoriteResponse::from).collect(),
    ))
}

/// Top-N favorites by rating
#[utoipa::path(
    get,
    path = "/api/v1/favorites/top/{n}",
    tag = "Favorites",
    security(("bearer" = [])),
    params(
        ("n" = i64, Path, description = "Maximum number of favorites to return")
    ),
    responses(
        (status = 200, description = "Top favorites, rating descending", body = Vec<FavoriteResponse>),
        (status = 400, description = "Invalid count"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn top_favorites(
    State(state): State<Arc<AppState>>,
    _user: AuthenticatedUser,
    Path(n): Path<i64>,
) -> ApiResult<Json<Vec<FavoriteResponse>>> {
    if n < 1 {
        return Err(ApiError::BadRequest("Count must be >= 1".to_string()));
    }

    let favorites = state
        .favorites
        .top_favorites(n)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(
        favorites.into_iter().map(FavoriteResponse::from).collect(),
    ))
}
