//! Catalog client configuration

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Catalog client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the external catalog service
    pub base_url: String,
    /// API key sent with every lookup
    pub api_key: String,
    /// Request timeout in seconds; a slow upstream never stalls the service
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.omdbapi.com/".to_string(),
            api_key: String::new(), // Must be set
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

impl CatalogConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("CATALOG_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(key) = std::env::var("CATALOG_API_KEY") {
            config.api_key = key;
        }
        if let Ok(timeout) = std::env::var("CATALOG_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                config.timeout_secs = secs;
            }
        }

        config
    }

    /// Validate the configuration, before any network call is attempted
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.base_url.is_empty() {
            return Err(CatalogError::Misconfigured(
                "catalog base URL must be set".to_string(),
            ));
        }
        if self.api_key.is_empty() {
            return Err(CatalogError::Misconfigured(
                "catalog API key must be set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_fails_validation() {
        let config = CatalogConfig::default();
        assert!(matches!(
            config.validate(),
            Err(CatalogError::Misconfigured(_))
        ));
    }

    #[test]
    fn test_missing_base_url_fails_validation() {
        let config = CatalogConfig {
            base_url: String::new(),
            api_key: "k".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CatalogError::Misconfigured(_))
        ));
    }

    #[test]
    fn test_complete_config_validates() {
        let config = CatalogConfig {
            api_key: "72cdd2f4".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
