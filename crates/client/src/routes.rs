//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{Authenticated, CreatePost, Home, Login, NotFound, Posts, Profile, Register};

// Router configuration
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Landing page redirects to login or the feed
    #[route("/")]
    Home {},

    // Auth routes
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},

    // Pages that need a session
    #[layout(Authenticated)]
        #[route("/profile")]
        Profile {},
        #[route("/posts")]
        Posts {},
        #[route("/posts/create")]
        CreatePost {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
