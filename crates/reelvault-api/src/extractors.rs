//! Custom Axum extractors
//!
//! Bearer-token authentication and validated JSON bodies.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;

// =============================================================================
// Authenticated User Extractor
// =============================================================================

/// Identity extracted from a verified access token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// User ID
    pub user_id: Uuid,
    /// User email
    pub email: String,
    /// Display name
    pub name: String,
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AuthenticatedUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| error_response(ApiError::Unauthorized))?;

        let claims = state
            .auth
            .jwt
            .verify_access_token(token)
            .map_err(|e| error_response(ApiError::from(e)))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| error_response(ApiError::Unauthorized))?;

        Ok(AuthenticatedUser {
            user_id,
            email: claims.email,
            name: claims.name,
        })
    }
}

// =============================================================================
// Validated JSON Extractor
// =============================================================================

/// JSON extractor with validation
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> axum::extract::FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + validator::Validate,
{
    type Rejection = Response;

    async fn from_request(
        req: axum::http::Request<axum::body::Body>,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| error_response(ApiError::BadRequest(e.to_string())))?;

        value
            .validate()
            .map_err(|e| error_response(ApiError::from(e)))?;

        Ok(ValidatedJson(value))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Create error response from ApiError
pub fn error_response(error: ApiError) -> Response {
    let status = error.status_code();
    let body = ErrorResponse::from(&error);

    (status, Json(body)).into_response()
}
