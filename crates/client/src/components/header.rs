//! Top bar with the brand and, while signed in, the navigation.

use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::Route;

#[component]
pub fn Header() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let signed_in = auth.is_authenticated();

    let logout = {
        let mut auth = auth.clone();
        move |_: MouseEvent| {
            auth.clear_auth();
            nav.push(Route::Login {});
        }
    };

    rsx! {
        header { class: "w-full flex items-center justify-between px-6 py-4 bg-white/10 backdrop-blur-sm border-b border-white/20 text-white shadow-md fixed top-0 left-0 z-50",
            h1 { class: "text-2xl font-bold bg-gradient-to-r from-purple-400 to-blue-400 text-transparent bg-clip-text",
                "MiRedSocial"
            }

            if signed_in {
                nav { class: "flex gap-4 text-sm",
                    Link { to: Route::Profile {}, class: "hover:text-blue-400 transition", "Profile" }
                    Link { to: Route::Posts {}, class: "hover:text-blue-400 transition", "Posts" }
                    Link { to: Route::CreatePost {}, class: "hover:text-blue-400 transition", "Create" }
                    button {
                        class: "text-red-300 hover:text-red-500 transition",
                        onclick: logout,
                        "Log out"
                    }
                }
            }
        }
    }
}
