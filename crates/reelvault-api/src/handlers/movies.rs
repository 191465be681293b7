//! Catalog search handlers

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::dto::MovieResponse;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Search the external catalog by title
#[utoipa::path(
    get,
    path = "/api/v1/movies/{title}",
    tag = "Movies",
    params(
        ("title" = String, Path, description = "Movie title to search for")
    ),
    responses(
        (status = 200, description = "Catalog entry", body = MovieResponse),
        (status = 404, description = "No catalog entry for this title"),
        (status = 502, description = "Catalog unavailable")
    )
)]
pub async fn search_movie(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> ApiResult<Json<MovieResponse>> {
    let entry = state
        .catalog
        .lookup_by_title(&title)
        .await
        .map_err(ApiError::from)?;

    if !entry.found {
        return Err(ApiError::NotFound(format!(
            "No catalog entry for title '{}'",
            title
        )));
    }

    Ok(Json(MovieResponse::from(entry)))
}
