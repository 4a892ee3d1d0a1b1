//! The signed-in user's details and their own posts.

use dioxus::prelude::*;
use redsocial_core::log_error;

use crate::auth_session::AuthContext;
use crate::components::ui::{Button, ButtonVariant, Card};
use crate::components::PostCard;
use crate::format::format_birth_date;
use crate::Route;

#[component]
pub fn Profile() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let session = auth.session;

    use_effect(move || {
        if session.read().user.is_none() {
            nav.replace(Route::Login {});
        }
    });

    let api = auth.api().posts.clone();
    let user_posts = use_resource(move || {
        let api = api.clone();
        let user_id = session.read().user.as_ref().map(|u| u.id.clone());
        async move {
            let Some(user_id) = user_id else {
                return Ok(Vec::new());
            };
            api.get_user_posts(&user_id).await.map_err(|err| {
                log_error!("Error loading posts for {user_id}: {err}");
                err.to_string()
            })
        }
    });

    let logout = {
        let mut auth = auth.clone();
        move |_: MouseEvent| {
            auth.clear_auth();
            nav.push(Route::Login {});
        }
    };

    let Some(user) = auth.user() else {
        return rsx! {};
    };
    let birth_date = format_birth_date(&user.birth_date);

    rsx! {
        div { class: "max-w-md mx-auto mt-12",
            Card { title: "My profile",

                div { class: "space-y-4",
                    div {
                        p { class: "text-sm text-blue-200", "Name" }
                        p { class: "text-lg font-semibold", "{user.full_name()}" }
                    }
                    div {
                        p { class: "text-sm text-blue-200", "Email" }
                        p { class: "text-lg font-semibold", "{user.email}" }
                    }
                    div {
                        p { class: "text-sm text-blue-200", "Alias" }
                        p { class: "text-lg font-semibold", "{user.alias}" }
                    }
                    div {
                        p { class: "text-sm text-blue-200", "Birth date" }
                        p { class: "text-lg font-semibold", "{birth_date}" }
                    }
                }

                Button {
                    variant: ButtonVariant::Danger,
                    class: "w-full mt-8",
                    onclick: logout,
                    "Log out"
                }
            }
        }

        div { class: "max-w-2xl mx-auto mt-10 space-y-6",
            h2 { class: "text-2xl font-bold", "My posts" }
            match user_posts.read().as_ref() {
                Some(Ok(posts)) => rsx! {
                    if posts.is_empty() {
                        p { class: "text-blue-200 italic", "You have not posted anything yet" }
                    } else {
                        for post in posts.iter() {
                            PostCard { key: "{post.id}", post: post.clone() }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    p { class: "text-red-400 text-sm", "Error: {e}" }
                },
                None => rsx! {
                    p { class: "text-blue-200 text-sm", "Loading posts..." }
                },
            }
        }
    }
}
