//! Password Service
//!
//! Password hashing using Argon2id (OWASP recommended):
//! - Fresh random salt per hash, so equal passwords never produce equal digests
//! - Configurable memory/time/parallelism cost factors
//! - Verification via the algorithm's native constant-time comparison

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params, Version,
};

use crate::config::PasswordConfig;
use crate::error::{AuthError, AuthResult};

/// Password service for hashing and verification
#[derive(Clone)]
pub struct PasswordService {
    config: PasswordConfig,
}

impl PasswordService {
    /// Create a new password service
    pub fn new(config: PasswordConfig) -> Self {
        Self { config }
    }

    /// Hash a password using Argon2id
    pub fn hash_password(&self, password: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let params = Params::new(
            self.config.memory_cost,
            self.config.time_cost,
            self.config.parallelism,
            Some(self.config.hash_length as usize),
        )
        .map_err(|e| AuthError::Config(format!("Invalid Argon2 params: {}", e)))?;

        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AuthError::PasswordHashingFailed)?;

        Ok(hash.to_string())
    }

    /// Verify a password against a stored digest
    ///
    /// Never fails: a malformed digest verifies as `false`, the same as a
    /// wrong password. Cost parameters are read back from the digest itself.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> PasswordConfig {
        PasswordConfig {
            // Use lower values for tests to be fast
            memory_cost: 4096,
            time_cost: 1,
            parallelism: 1,
            hash_length: 32,
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let service = PasswordService::new(test_config());
        let password = "correct horse battery staple";

        let hash = service.hash_password(password).unwrap();
        assert!(hash.starts_with("$argon2id$"));

        assert!(service.verify_password(password, &hash));
        assert!(!service.verify_password("wrong password", &hash));
    }

    #[test]
    fn test_same_password_different_hashes() {
        let service = PasswordService::new(test_config());
        let password = "repeatable-input";

        let hash1 = service.hash_password(password).unwrap();
        let hash2 = service.hash_password(password).unwrap();

        // Fresh salt per call: digests are not equality-comparable
        assert_ne!(hash1, hash2);
        assert!(service.verify_password(password, &hash1));
        assert!(service.verify_password(password, &hash2));
    }

    #[test]
    fn test_malformed_digest_verifies_false() {
        let service = PasswordService::new(test_config());

        assert!(!service.verify_password("anything", "not-a-digest"));
        assert!(!service.verify_password("anything", ""));
        assert!(!service.verify_password("anything", "$argon2id$corrupt"));
    }

    #[test]
    fn test_cross_password_rejection() {
        let service = PasswordService::new(test_config());

        let hash = service.hash_password("password-two").unwrap();
        assert!(!service.verify_password("password-one", &hash));
    }
}
