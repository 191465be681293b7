//! Request/response DTOs
//!
//! Boundary schema validation happens here via `validator` derives; the
//! services below assume well-formed input.

pub mod auth;
pub mod favorites;
pub mod movies;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use favorites::{FavoriteResponse, SaveFavoriteRequest};
pub use movies::MovieResponse;
