//! Redsocial Client - Dioxus web application
//!
//! Login, registration, the post feed and the profile page of MiRedSocial,
//! built on the session store and service clients of `redsocial-core`.

pub mod auth_session;
pub mod components;
pub mod feed;
pub mod format;
pub mod forms;
pub mod routes;
pub mod stores;
pub mod views;

pub use auth_session::{AuthContext, AuthProvider};
pub use routes::Route;
