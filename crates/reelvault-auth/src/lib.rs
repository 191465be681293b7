//! Reelvault Authentication Layer
//!
//! Credential handling for the movie-favorites service:
//!
//! - **Password Security**: Argon2id hashing (OWASP recommended)
//! - **JWT Authentication**: stateless access + refresh token pairs
//! - **Registration & Login**: over the store's `UserStore` interface
//!
//! Registration enforces email uniqueness twice: a best-effort pre-check plus
//! the store's unique index, whose conflict also surfaces as `EmailTaken`.
//! Login collapses "unknown email" and "wrong password" into a single
//! `InvalidCredentials` kind.

pub mod config;
pub mod error;
pub mod jwt;
pub mod password;
pub mod types;

pub use config::{AuthConfig, JwtConfig, PasswordConfig};
pub use error::{AuthError, AuthResult};
pub use jwt::JwtService;
pub use password::PasswordService;
pub use types::{TokenClaims, TokenPair, TokenType, UserIdentity};

use std::sync::Arc;

use reelvault_db::{DbUser, NewUser, UserStore};

/// Main authentication service: registration and login flows
pub struct AuthService {
    pub jwt: JwtService,
    pub password: PasswordService,
    users: Arc<dyn UserStore>,
}

impl AuthService {
    /// Create a new auth service
    ///
    /// Fails when the JWT configuration is unusable (missing secret or
    /// unsupported algorithm) so a misconfigured service never starts.
    pub fn new(users: Arc<dyn UserStore>, config: AuthConfig) -> AuthResult<Self> {
        let jwt = JwtService::new(config.jwt)?;
        let password = PasswordService::new(config.password);

        Ok(Self {
            jwt,
            password,
            users,
        })
    }

    /// Register a new user account
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AuthResult<DbUser> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = self.password.hash_password(password)?;

        let user = self
            .users
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, email = %user.email, "New user registered");

        Ok(user)
    }

    /// Authenticate a user and issue a token pair
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<TokenPair> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.password.verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let identity = UserIdentity {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        };

        let pair = self.jwt.issue(&identity)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelvault_db::memory::MemoryUserStore;

    fn test_config() -> AuthConfig {
        let mut config = AuthConfig::default();
        config.jwt.secret = "test-secret-key-at-least-32-bytes-long!!".to_string();
        // Lower Argon2 cost so tests stay fast
        config.password.memory_cost = 4096;
        config.password.time_cost = 1;
        config
    }

    fn test_service() -> AuthService {
        AuthService::new(Arc::new(MemoryUserStore::new()), test_config()).unwrap()
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let service = test_service();

        let user = service
            .register("Ada", "ada@example.com", "hunter2hunter2")
            .await
            .unwrap();
        assert_eq!(user.email, "ada@example.com");
        // The stored digest is opaque, never the plaintext
        assert_ne!(user.password_hash, "hunter2hunter2");

        let pair = service
            .login("ada@example.com", "hunter2hunter2")
            .await
            .unwrap();

        let claims = service.jwt.verify_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.name, "Ada");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = test_service();

        service
            .register("A", "a@x.com", "password1password")
            .await
            .unwrap();

        let result = service.register("B", "a@x.com", "password2password").await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_different_case() {
        let service = test_service();

        service
            .register("A", "a@x.com", "password1password")
            .await
            .unwrap();

        let result = service.register("B", "A@X.com", "password2password").await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = test_service();

        service
            .register("Ada", "ada@example.com", "hunter2hunter2")
            .await
            .unwrap();

        let result = service.login("ada@example.com", "wrong-password").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_same_error_kind() {
        let service = test_service();

        let result = service.login("nobody@example.com", "whatever").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_misconfigured_service_never_starts() {
        let mut config = test_config();
        config.jwt.secret = String::new();

        let result = AuthService::new(Arc::new(MemoryUserStore::new()), config);
        assert!(matches!(result, Err(AuthError::Config(_))));
    }
}
