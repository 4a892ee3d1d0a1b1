//! Feed of every post, with optimistic likes.

use dioxus::prelude::*;
use redsocial_core::log_error;
use redsocial_shared::Post;

use crate::auth_session::AuthContext;
use crate::components::ui::Banner;
use crate::components::PostCard;
use crate::feed::apply_like;

#[component]
pub fn Posts() -> Element {
    let auth = use_context::<AuthContext>();
    let mut posts = use_signal(Vec::<Post>::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    // Fetch whenever a session is present; re-runs if the session changes
    let session = auth.session;
    let api = auth.api().posts.clone();
    use_effect(move || {
        if !session.read().is_authenticated() {
            return;
        }

        let api = api.clone();
        is_loading.set(true);
        spawn(async move {
            match api.get_posts().await {
                Ok(data) => {
                    posts.set(data);
                    error.set(None);
                }
                Err(err) => {
                    log_error!("Error loading posts: {err}");
                    error.set(Some("Could not load posts".to_string()));
                }
            }
            is_loading.set(false);
        });
    });

    let api = auth.api().posts.clone();
    let like = use_callback(move |post_id: String| {
        let api = api.clone();
        spawn(async move {
            match api.like_post(&post_id).await {
                Ok(_) => {
                    posts.with_mut(|list| apply_like(list, &post_id));
                }
                Err(err) => log_error!("Error liking post {post_id}: {err}"),
            }
        });
    });

    rsx! {
        h1 { class: "text-3xl font-bold text-center mb-8 bg-gradient-to-r from-purple-400 to-blue-400 text-transparent bg-clip-text",
            "Posts"
        }

        div { class: "space-y-6 max-w-2xl mx-auto",
            if let Some(message) = error.cloned() {
                Banner { message: message }
            }
            if is_loading() && posts.read().is_empty() {
                p { class: "text-center text-blue-200", "Loading posts..." }
            }
            for post in posts.read().iter() {
                PostCard { key: "{post.id}", post: post.clone(), on_like: like }
            }
        }
    }
}
