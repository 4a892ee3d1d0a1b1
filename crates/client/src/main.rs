//! Redsocial Client - Main entry point
//!
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use redsocial_client::{AuthProvider, Route};

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    EnvFilter::new("redsocial_client=debug,redsocial_core=debug")
                }),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "MiRedSocial" }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
