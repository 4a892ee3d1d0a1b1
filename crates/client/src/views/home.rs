//! Redirects and the signed-in layout.

use dioxus::prelude::*;
use redsocial_core::log_debug;

use crate::auth_session::AuthContext;
use crate::components::Header;
use crate::Route;

/// Landing page: the feed when signed in, the login form otherwise
#[component]
pub fn Home() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();

    use_effect(move || {
        if auth.is_authenticated() {
            nav.replace(Route::Posts {});
        } else {
            nav.replace(Route::Login {});
        }
    });

    rsx! {
        div { class: "flex items-center justify-center min-h-screen text-white", "Redirecting..." }
    }
}

/// Unknown paths go to the login form
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    log_debug!("no route for /{}", segments.join("/"));

    use_effect(move || {
        nav.replace(Route::Login {});
    });

    rsx! {}
}

/// Layout for pages that need a session; bounces to login without a token
#[component]
pub fn Authenticated() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let signed_in = auth.is_authenticated();

    let session = auth.session;
    use_effect(move || {
        if !session.read().is_authenticated() {
            nav.replace(Route::Login {});
        }
    });

    rsx! {
        if signed_in {
            div { class: "min-h-screen bg-gradient-to-br from-indigo-900 via-purple-900 to-blue-900 text-white pt-20 px-4",
                Header {}
                Outlet::<Route> {}
            }
        }
    }
}
