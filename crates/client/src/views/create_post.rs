use dioxus::prelude::*;
use redsocial_core::log_error;
use redsocial_shared::PostFormData;

use crate::auth_session::AuthContext;
use crate::components::ui::{Banner, Button, Card};
use crate::forms::post_message_error;
use crate::Route;

#[component]
pub fn CreatePost() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let mut message = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        if is_loading() {
            return;
        }

        let data = PostFormData {
            message: message.cloned(),
        };
        if let Some(problem) = post_message_error(&data.message) {
            error.set(Some(problem.to_string()));
            return;
        }

        is_loading.set(true);
        error.set(None);

        let api = auth.api().posts.clone();
        spawn(async move {
            match api.create_post(&data).await {
                Ok(_) => {
                    message.set(String::new());
                    nav.push(Route::Posts {});
                }
                Err(err) => {
                    log_error!("Error creating post: {err}");
                    error.set(Some("Could not create the post".to_string()));
                }
            }
            is_loading.set(false);
        });
    };

    rsx! {
        div { class: "flex items-center justify-center",
            div { class: "max-w-md w-full mt-12",
                Card { title: "New post",

                    if let Some(problem) = error.cloned() {
                        Banner { message: problem }
                    }

                    form { class: "space-y-4", onsubmit: handle_submit,
                        label { class: "block",
                            span { class: "block text-blue-200 mb-1", "Message" }
                            textarea {
                                class: "w-full p-3 rounded-lg bg-white/10 border border-white/30 text-white placeholder-blue-300 focus:outline-none focus:ring-2 focus:ring-blue-400 transition",
                                rows: "5",
                                placeholder: "Write your message...",
                                value: "{message}",
                                oninput: move |e: FormEvent| {
                                    message.set(e.value());
                                    error.set(None);
                                },
                            }
                        }
                        Button {
                            submit: true,
                            busy: is_loading(),
                            class: "w-full",
                            if is_loading() { "Publishing..." } else { "Publish" }
                        }
                    }
                }
            }
        }
    }
}
