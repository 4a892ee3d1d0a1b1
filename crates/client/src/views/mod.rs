//! View components for the application.

pub mod create_post;
pub mod home;
pub mod login;
pub mod posts;
pub mod profile;
pub mod register;

pub use create_post::CreatePost;
pub use home::{Authenticated, Home, NotFound};
pub use login::Login;
pub use posts::Posts;
pub use profile::Profile;
pub use register::Register;
