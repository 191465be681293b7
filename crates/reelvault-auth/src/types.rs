//! Core authentication types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The subset of a user account that is safe to embed in a token payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    /// User ID
    pub id: Uuid,
    /// User email
    pub email: String,
    /// Display name
    pub name: String,
}

/// JWT token pair (access + refresh)
///
/// Produced per successful login, never persisted server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Access token
    pub access_token: String,
    /// Refresh token
    pub refresh_token: String,
    /// Access token expiry (Unix timestamp)
    pub access_expires_at: i64,
    /// Refresh token expiry (Unix timestamp)
    pub refresh_expires_at: i64,
    /// Token type (always "Bearer")
    pub token_type: String,
}

impl TokenPair {
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_at: i64,
        refresh_expires_at: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
            token_type: "Bearer".to_string(),
        }
    }
}

/// Token type enum for JWT claims
///
/// Access and refresh tokens are never interchangeable; verification checks
/// this discriminant after the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims structure
///
/// Access tokens carry the full identity; refresh tokens carry only the
/// subject, so `email`/`name` default to empty on decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Token type
    pub token_type: TokenType,
    /// User email (access tokens only)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    /// Display name (access tokens only)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Lifetime in seconds
    pub expires_in: i64,
    /// Issuer
    pub iss: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_pair_is_bearer() {
        let pair = TokenPair::new("a".to_string(), "r".to_string(), 1, 2);
        assert_eq!(pair.token_type, "Bearer");
    }

    #[test]
    fn test_refresh_claims_omit_identity_fields() {
        let claims = TokenClaims {
            sub: "user".to_string(),
            token_type: TokenType::Refresh,
            email: String::new(),
            name: String::new(),
            iat: 0,
            exp: 100,
            expires_in: 100,
            iss: "reelvault".to_string(),
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("name").is_none());
        assert_eq!(json["token_type"], "refresh");
    }
}
