//! OpenAPI documentation

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// API documentation root
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth::register,
        crate::handlers::auth::login,
        crate::handlers::favorites::save_favorite,
        crate::handlers::favorites::list_favorites,
        crate::handlers::favorites::top_favorites,
        crate::handlers::movies::search_movie,
        crate::handlers::health::health_check,
    ),
    components(schemas(
        crate::dto::RegisterRequest,
        crate::dto::RegisterResponse,
        crate::dto::LoginRequest,
        crate::dto::LoginResponse,
        crate::dto::SaveFavoriteRequest,
        crate::dto::FavoriteResponse,
        crate::dto::MovieResponse,
        crate::error::ErrorResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Favorites", description = "Catalog-validated favorite movies"),
        (name = "Movies", description = "External catalog search"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_builds() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/auth/login"));
        assert!(doc.paths.paths.contains_key("/api/v1/favorites"));
    }
}
