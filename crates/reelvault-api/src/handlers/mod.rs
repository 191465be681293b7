//! Request handlers

pub mod auth;
pub mod favorites;
pub mod health;
pub mod movies;
