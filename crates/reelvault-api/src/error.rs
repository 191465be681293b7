//! API error handling
//!
//! Every business-rule failure maps to a distinct caller-visible status:
//! auth failures are 401, validation failures 400/404, upstream failures 502.
//! Store and internal errors never leak details to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Catalog upstream unavailable")]
    UpstreamUnavailable,

    #[error("Database error")]
    DatabaseError,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Machine-readable error code, safe to expose
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::EmailAlreadyExists => "EMAIL_TAKEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            Self::DatabaseError => "INTERNAL_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::EmailAlreadyExists => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
            Self::DatabaseError | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub msg: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let msg = match err {
            // Don't leak internal details
            ApiError::DatabaseError | ApiError::Internal(_) => {
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        Self {
            code: err.error_code().to_string(),
            msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::from(&self);

        (status, Json(body)).into_response()
    }
}

// Implement From conversions

impl From<reelvault_auth::AuthError> for ApiError {
    fn from(err: reelvault_auth::AuthError) -> Self {
        use reelvault_auth::AuthError;
        match err {
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::InvalidTokenType => {
                Self::Unauthorized
            }
            AuthError::InvalidCredentials => Self::InvalidCredentials,
            AuthError::EmailTaken => Self::EmailAlreadyExists,
            AuthError::Database(msg) => {
                tracing::error!(error = %msg, "Store error in auth flow");
                Self::DatabaseError
            }
            AuthError::PasswordHashingFailed | AuthError::Config(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<reelvault_db::DbError> for ApiError {
    fn from(err: reelvault_db::DbError) -> Self {
        tracing::error!(error = ?err, "Store error");
        match err {
            reelvault_db::DbError::NotFound(msg) => Self::NotFound(msg),
            _ => Self::DatabaseError,
        }
    }
}

impl From<reelvault_catalog::CatalogError> for ApiError {
    fn from(err: reelvault_catalog::CatalogError) -> Self {
        use reelvault_catalog::CatalogError;
        match err {
            CatalogError::Misconfigured(msg) => Self::Internal(msg),
            CatalogError::Upstream { status } => {
                tracing::warn!(status = status, "Catalog upstream returned error status");
                Self::UpstreamUnavailable
            }
            CatalogError::Network(e) => {
                tracing::warn!(error = %e, "Catalog request failed");
                Self::UpstreamUnavailable
            }
        }
    }
}

impl From<reelvault_favorites::FavoritesError> for ApiError {
    fn from(err: reelvault_favorites::FavoritesError) -> Self {
        use reelvault_catalog::ValidationError;
        use reelvault_favorites::FavoritesError;
        match err {
            FavoritesError::Validation(ValidationError::NotFound) => {
                Self::NotFound("No catalog entry for the given IMDb ID".to_string())
            }
            FavoritesError::Validation(mismatch @ ValidationError::TitleMismatch { .. }) => {
                Self::BadRequest(mismatch.to_string())
            }
            FavoritesError::Validation(ValidationError::Upstream(e)) => Self::from(e),
            FavoritesError::Store(msg) => {
                tracing::error!(error = %msg, "Store error in favorites flow");
                Self::DatabaseError
            }
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map(|m| m.as_ref()).unwrap_or("invalid")
                    )
                })
            })
            .collect();
        Self::ValidationError(messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::EmailAlreadyExists.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::UpstreamUnavailable.status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_internal_details_hidden() {
        let err = ApiError::Internal("connection string with password".to_string());
        let body = ErrorResponse::from(&err);
        assert!(!body.msg.contains("password"));
        assert_eq!(body.code, "INTERNAL_ERROR");
    }

    #[test]
    fn test_auth_error_mapping() {
        use reelvault_auth::AuthError;

        assert!(matches!(
            ApiError::from(AuthError::TokenExpired),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from(AuthError::EmailTaken),
            ApiError::EmailAlreadyExists
        ));
    }

    #[test]
    fn test_favorites_error_mapping() {
        use reelvault_catalog::{CatalogError, ValidationError};
        use reelvault_favorites::FavoritesError;

        assert!(matches!(
            ApiError::from(FavoritesError::Validation(ValidationError::NotFound)),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(FavoritesError::Validation(ValidationError::TitleMismatch {
                submitted: "a".to_string(),
                catalog: "b".to_string(),
            })),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(FavoritesError::Validation(ValidationError::Upstream(
                CatalogError::Upstream { status: 503 }
            ))),
            ApiError::UpstreamUnavailable
        ));
    }
}
