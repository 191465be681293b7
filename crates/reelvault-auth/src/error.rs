//! Authentication error types
//!
//! Failure kinds are the contract here: the HTTP layer maps each kind to a
//! status, and "no such user" is deliberately indistinguishable from "wrong
//! password" for callers.

use thiserror::Error;

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication error types
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token has expired
    #[error("Token has expired")]
    TokenExpired,

    /// Token is invalid (malformed, wrong signature, unsupported algorithm)
    #[error("Invalid token")]
    InvalidToken,

    /// Token type mismatch (expected access, got refresh, or vice versa)
    #[error("Invalid token type")]
    InvalidTokenType,

    /// Invalid credentials (unknown email or wrong password)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Email is already registered
    #[error("Email already registered")]
    EmailTaken,

    /// Password hashing failed
    #[error("Password hashing failed")]
    PasswordHashingFailed,

    /// Store error
    #[error("Store error: {0}")]
    Database(String),

    /// Configuration error (fatal at startup, never per-request)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::TokenExpired,
            _ => Self::InvalidToken,
        }
    }
}

impl From<reelvault_db::DbError> for AuthError {
    fn from(err: reelvault_db::DbError) -> Self {
        match err {
            // The unique index is the uniqueness source of truth; a duplicate
            // slipping past the pre-check still surfaces as EmailTaken.
            reelvault_db::DbError::Duplicate(_) => Self::EmailTaken,
            other => Self::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_maps_to_email_taken() {
        let err: AuthError = reelvault_db::DbError::Duplicate("a@x.com".to_string()).into();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[test]
    fn test_other_db_errors_map_to_database() {
        let err: AuthError = reelvault_db::DbError::NotFound("user".to_string()).into();
        assert!(matches!(err, AuthError::Database(_)));
    }
}
