//! Favorite validation
//!
//! Verify-before-commit: a favorite may only be stored once the catalog
//! confirms the submitted IMDb ID exists and the submitted title matches the
//! catalog title. This is what keeps fabricated or mismatched identifiers out
//! of the favorites store.

use std::sync::Arc;

use crate::client::CatalogLookup;
use crate::error::ValidationError;
use crate::types::CatalogEntry;

/// Validates favorite candidates against the external catalog
#[derive(Clone)]
pub struct FavoriteValidator {
    catalog: Arc<dyn CatalogLookup>,
}

impl FavoriteValidator {
    /// Create a new validator over a catalog lookup
    pub fn new(catalog: Arc<dyn CatalogLookup>) -> Self {
        Self { catalog }
    }

    /// Check a candidate's IMDb ID and title against the catalog
    ///
    /// Title comparison is a case-insensitive exact match; any other
    /// difference is a mismatch.
    pub async fn validate(
        &self,
        imdb_id: &str,
        title: &str,
    ) -> Result<CatalogEntry, ValidationError> {
        let entry = self.catalog.lookup_by_id(imdb_id).await?;

        if !entry.found {
            return Err(ValidationError::NotFound);
        }

        if entry.title.to_lowercase() != title.to_lowercase() {
            return Err(ValidationError::TitleMismatch {
                submitted: title.to_string(),
                catalog: entry.title,
            });
        }

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use async_trait::async_trait;

    /// Catalog double answering from a fixed table
    struct FixedCatalog {
        entries: Vec<CatalogEntry>,
        fail_with_status: Option<u16>,
    }

    impl FixedCatalog {
        fn with_entry(title: &str, imdb_id: &str) -> Self {
            Self {
                entries: vec![CatalogEntry {
                    title: title.to_string(),
                    year: "2017".to_string(),
                    genre: "Action".to_string(),
                    imdb_id: imdb_id.to_string(),
                    found: true,
                }],
                fail_with_status: None,
            }
        }

        fn empty() -> Self {
            Self {
                entries: Vec::new(),
                fail_with_status: None,
            }
        }

        fn unavailable(status: u16) -> Self {
            Self {
                entries: Vec::new(),
                fail_with_status: Some(status),
            }
        }

        fn miss() -> CatalogEntry {
            CatalogEntry {
                title: String::new(),
                year: String::new(),
                genre: String::new(),
                imdb_id: String::new(),
                found: false,
            }
        }
    }

    #[async_trait]
    impl CatalogLookup for FixedCatalog {
        async fn lookup_by_title(&self, title: &str) -> Result<CatalogEntry, CatalogError> {
            if let Some(status) = self.fail_with_status {
                return Err(CatalogError::Upstream { status });
            }
            Ok(self
                .entries
                .iter()
                .find(|e| e.title == title)
                .cloned()
                .unwrap_or_else(Self::miss))
        }

        async fn lookup_by_id(&self, imdb_id: &str) -> Result<CatalogEntry, CatalogError> {
            if let Some(status) = self.fail_with_status {
                return Err(CatalogError::Upstream { status });
            }
            Ok(self
                .entries
                .iter()
                .find(|e| e.imdb_id == imdb_id)
                .cloned()
                .unwrap_or_else(Self::miss))
        }
    }

    #[tokio::test]
    async fn test_matching_title_passes() {
        let validator = FavoriteValidator::new(Arc::new(FixedCatalog::with_entry(
            "Blade Runner",
            "tt0083658",
        )));

        let entry = validator.validate("tt0083658", "Blade Runner").await.unwrap();
        assert_eq!(entry.imdb_id, "tt0083658");
    }

    #[tokio::test]
    async fn test_case_only_difference_passes() {
        let validator = FavoriteValidator::new(Arc::new(FixedCatalog::with_entry(
            "Blade Runner",
            "tt0083658",
        )));

        assert!(validator.validate("tt0083658", "blade RUNNER").await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let validator = FavoriteValidator::new(Arc::new(FixedCatalog::empty()));

        let result = validator.validate("tt9999999", "Anything").await;
        assert!(matches!(result, Err(ValidationError::NotFound)));
    }

    #[tokio::test]
    async fn test_title_mismatch_rejected() {
        let validator = FavoriteValidator::new(Arc::new(FixedCatalog::with_entry(
            "Blade Runner",
            "tt0083658",
        )));

        let result = validator.validate("tt0083658", "Blade Runner 2049").await;
        assert!(matches!(
            result,
            Err(ValidationError::TitleMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let validator = FavoriteValidator::new(Arc::new(FixedCatalog::unavailable(503)));

        let result = validator.validate("tt0083658", "Blade Runner").await;
        assert!(matches!(
            result,
            Err(ValidationError::Upstream(CatalogError::Upstream { status: 503 }))
        ));
    }
}
