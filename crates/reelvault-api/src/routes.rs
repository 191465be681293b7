//! API routes

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers;
use crate::state::AppState;

/// Create API v1 routes
pub fn api_v1_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Auth routes
        .nest("/auth", auth_routes())
        // Favorites routes (require auth)
        .nest("/favorites", favorites_routes())
        // Catalog search (public)
        .route("/movies/:title", get(handlers::movies::search_movie))
}

/// Authentication routes
fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
}

/// Favorites routes
fn favorites_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            post(handlers::favorites::save_favorite).get(handlers::favorites::list_favorites),
        )
        .route("/top/:n", get(handlers::favorites::top_favorites))
}

/// Create Swagger UI routes
pub fn swagger_routes() -> Router<Arc<AppState>> {
    use crate::openapi::ApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    Router::new().merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
}
