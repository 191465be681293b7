//! Reelvault Catalog Layer
//!
//! Lookups against the external movie catalog and the validation policy that
//! gates writes to the favorites store.
//!
//! Each lookup is one live outbound call with the shared API credential; there
//! is no caching and no retrying. A miss is data (`CatalogEntry::found ==
//! false`), an unreachable upstream is an error.

pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod validator;

pub use client::{CatalogClient, CatalogLookup};
pub use config::CatalogConfig;
pub use error::{CatalogError, ValidationError};
pub use types::CatalogEntry;
pub use validator::FavoriteValidator;
