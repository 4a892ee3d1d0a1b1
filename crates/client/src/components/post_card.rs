//! Single post in a list.

use dioxus::prelude::*;
use redsocial_shared::Post;

use crate::format::format_timestamp;

#[derive(Props, Clone, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
    /// Called with the post id when the like button is pressed.
    #[props(optional)]
    pub on_like: Option<EventHandler<String>>,
}

#[component]
pub fn PostCard(props: PostCardProps) -> Element {
    let post = props.post;
    let created = format_timestamp(&post.created_at);
    let likes = if post.likes.is_empty() { "0".to_string() } else { post.likes.clone() };

    rsx! {
        div { class: "bg-white/10 border border-white/20 rounded-xl p-6 shadow-lg backdrop-blur-md",
            div { class: "mb-2 text-sm text-blue-200",
                "{post.alias} ({post.first_name} {post.last_name})"
            }
            p { class: "text-lg mb-4", "{post.message}" }
            div { class: "flex justify-between items-center text-blue-300 text-sm",
                span { "{created}" }
                match props.on_like {
                    Some(on_like) => rsx! {
                        button {
                            class: "flex items-center gap-2 text-white hover:text-blue-400 transition",
                            onclick: {
                                let id = post.id.clone();
                                move |_| on_like.call(id.clone())
                            },
                            "👍 {likes}"
                        }
                    },
                    None => rsx! {
                        span { class: "flex items-center gap-2 text-white", "👍 {likes}" }
                    },
                }
            }
        }
    }
}
