//! Reusable components.

pub mod header;
pub mod post_card;
pub mod ui;

pub use header::Header;
pub use post_card::PostCard;
