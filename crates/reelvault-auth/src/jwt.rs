//! JWT Token Service
//!
//! Stateless dual-token issuance:
//! - Access tokens (short-lived) carrying the user identity
//! - Refresh tokens (long-lived) carrying only the subject
//! - Signature, issuer, and expiry are all enforced at decode time
//!
//! Tokens are opaque outside this module; nothing else encodes or decodes
//! them.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::error::{AuthError, AuthResult};
use crate::types::{TokenClaims, TokenPair, TokenType, UserIdentity};

/// JWT service for token management
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create a new JWT service
    ///
    /// Fails when the secret is missing or the algorithm is unsupported; both
    /// are startup errors, the service never signs with a bad configuration.
    pub fn new(config: JwtConfig) -> AuthResult<Self> {
        if config.secret.is_empty() {
            return Err(AuthError::Config("JWT secret must be set".to_string()));
        }

        let algorithm = match config.algorithm.as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => {
                return Err(AuthError::Config(format!(
                    "Unsupported JWT algorithm: {}",
                    other
                )))
            }
        };

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Ok(Self {
            config,
            algorithm,
            encoding_key,
            decoding_key,
        })
    }

    /// Generate a token pair (access + refresh) for an authenticated identity
    pub fn issue(&self, identity: &UserIdentity) -> AuthResult<TokenPair> {
        let now = Utc::now();
        let access_lifetime = Duration::from_std(self.config.access_token_lifetime)
            .map_err(|e| AuthError::Config(e.to_string()))?;
        let refresh_lifetime = Duration::from_std(self.config.refresh_token_lifetime)
            .map_err(|e| AuthError::Config(e.to_string()))?;

        let access_exp = now + access_lifetime;
        let access_claims = TokenClaims {
            sub: identity.id.to_string(),
            token_type: TokenType::Access,
            email: identity.email.clone(),
            name: identity.name.clone(),
            iat: now.timestamp(),
            exp: access_exp.timestamp(),
            expires_in: access_lifetime.num_seconds(),
            iss: self.config.issuer.clone(),
        };

        let access_token = encode(
            &Header::new(self.algorithm),
            &access_claims,
            &self.encoding_key,
        )?;

        // The refresh payload carries only the subject
        let refresh_exp = now + refresh_lifetime;
        let refresh_claims = TokenClaims {
            sub: identity.id.to_string(),
            token_type: TokenType::Refresh,
            email: String::new(),
            name: String::new(),
            iat: now.timestamp(),
            exp: refresh_exp.timestamp(),
            expires_in: refresh_lifetime.num_seconds(),
            iss: self.config.issuer.clone(),
        };

        let refresh_token = encode(
            &Header::new(self.algorithm),
            &refresh_claims,
            &self.encoding_key,
        )?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            access_exp.timestamp(),
            refresh_exp.timestamp(),
        ))
    }

    /// Decode a token, verifying signature, algorithm, issuer, and expiry
    pub fn decode(&self, token: &str) -> AuthResult<TokenClaims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.config.issuer]);
        validation.validate_exp = true;

        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &validation)?;

        Ok(token_data.claims)
    }

    /// Validate an access token and return its claims
    pub fn verify_access_token(&self, token: &str) -> AuthResult<TokenClaims> {
        let claims = self.decode(token)?;

        if claims.token_type != TokenType::Access {
            return Err(AuthError::InvalidTokenType);
        }

        Ok(claims)
    }

    /// Validate a refresh token and return its claims
    pub fn verify_refresh_token(&self, token: &str) -> AuthResult<TokenClaims> {
        let claims = self.decode(token)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AuthError::InvalidTokenType);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-for-jwt-tokens-min-32-bytes!".to_string(),
            access_token_lifetime: std::time::Duration::from_secs(1800),
            refresh_token_lifetime: std::time::Duration::from_secs(604800),
            issuer: "reelvault-test".to_string(),
            algorithm: "HS256".to_string(),
        }
    }

    fn test_identity() -> UserIdentity {
        UserIdentity {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
        }
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        let mut config = test_config();
        config.secret = String::new();

        assert!(matches!(
            JwtService::new(config),
            Err(AuthError::Config(_))
        ));
    }

    #[test]
    fn test_unsupported_algorithm_is_fatal() {
        let mut config = test_config();
        config.algorithm = "none".to_string();

        assert!(matches!(
            JwtService::new(config),
            Err(AuthError::Config(_))
        ));
    }

    #[test]
    fn test_issue_token_pair() {
        let service = JwtService::new(test_config()).unwrap();
        let pair = service.issue(&test_identity()).unwrap();

        assert!(!pair.access_token.is_empty());
        assert!(!pair.refresh_token.is_empty());
        assert_eq!(pair.token_type, "Bearer");
        assert!(pair.refresh_expires_at > pair.access_expires_at);
    }

    #[test]
    fn test_access_token_recovers_identity() {
        let service = JwtService::new(test_config()).unwrap();
        let identity = test_identity();
        let pair = service.issue(&identity).unwrap();

        let claims = service.verify_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.sub, identity.id.to_string());
        assert_eq!(claims.email, identity.email);
        assert_eq!(claims.name, identity.name);
        assert_eq!(claims.token_type, TokenType::Access);
        assert_eq!(claims.expires_in, 1800);
    }

    #[test]
    fn test_refresh_token_carries_subject_only() {
        let service = JwtService::new(test_config()).unwrap();
        let identity = test_identity();
        let pair = service.issue(&identity).unwrap();

        let claims = service.verify_refresh_token(&pair.refresh_token).unwrap();
        assert_eq!(claims.sub, identity.id.to_string());
        assert_eq!(claims.token_type, TokenType::Refresh);
        assert_eq!(claims.expires_in, 604800);
        assert!(claims.email.is_empty());
        assert!(claims.name.is_empty());
    }

    #[test]
    fn test_access_token_fails_as_refresh() {
        let service = JwtService::new(test_config()).unwrap();
        let pair = service.issue(&test_identity()).unwrap();

        let result = service.verify_refresh_token(&pair.access_token);
        assert!(matches!(result, Err(AuthError::InvalidTokenType)));

        let result = service.verify_access_token(&pair.refresh_token);
        assert!(matches!(result, Err(AuthError::InvalidTokenType)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = JwtService::new(test_config()).unwrap();
        let pair = service.issue(&test_identity()).unwrap();

        // Flip the last signature character
        let mut tampered = pair.access_token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        let result = service.decode(&tampered);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = JwtService::new(test_config()).unwrap();
        let result = service.decode("not-a-token");
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = JwtService::new(test_config()).unwrap();

        // Manufacture a token whose lifetime elapsed well past any leeway
        let now = Utc::now();
        let claims = TokenClaims {
            sub: Uuid::new_v4().to_string(),
            token_type: TokenType::Access,
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
            expires_in: 3600,
            iss: "reelvault-test".to_string(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(test_config().secret.as_bytes()),
        )
        .unwrap();

        let result = service.decode(&token);
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let mut other_config = test_config();
        other_config.issuer = "someone-else".to_string();
        let other = JwtService::new(other_config).unwrap();
        let service = JwtService::new(test_config()).unwrap();

        let pair = other.issue(&test_identity()).unwrap();
        let result = service.decode(&pair.access_token);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
