//! Shared types for the redsocial client and the services it talks to.

pub mod likes;
pub mod models;

pub use likes::increment_likes;
pub use models::*;
