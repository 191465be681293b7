//! Store repositories
//!
//! One repository per logical collection: `users` and `favorites`.

pub mod favorite;
pub mod user;

pub use favorite::FavoriteRepo;
pub use user::UserRepo;
