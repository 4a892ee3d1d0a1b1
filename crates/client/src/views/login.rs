use dioxus::prelude::*;
use redsocial_core::log_error;
use redsocial_shared::Credentials;

use crate::auth_session::AuthContext;
use crate::components::ui::{Banner, Button, ButtonVariant, Card, InputType, TextInput};
use crate::forms::{error_for, login_errors, FieldError};
use crate::stores::take_flash;
use crate::Route;

const LOGIN_FAILED: &str = "Invalid credentials";

#[component]
pub fn Login() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let notice = use_hook(take_flash);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut field_errors = use_signal(Vec::<FieldError>::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        if is_submitting() {
            return;
        }

        let credentials = Credentials {
            email: email.read().trim().to_string(),
            password: password.cloned(),
        };

        error.set(None);
        let invalid = login_errors(&credentials);
        if !invalid.is_empty() {
            field_errors.set(invalid);
            return;
        }
        field_errors.set(Vec::new());
        is_submitting.set(true);

        let mut auth = auth.clone();
        spawn(async move {
            match auth.api().auth.login(&credentials).await {
                Ok(res) => match res.into_auth() {
                    Some((token, user)) => {
                        auth.set_auth(token, user);
                        nav.push(Route::Profile {});
                    }
                    None => {
                        log_error!("Login error: response has no token or user");
                        error.set(Some(LOGIN_FAILED.to_string()));
                    }
                },
                Err(err) => {
                    log_error!("Login error: {err}");
                    error.set(Some(LOGIN_FAILED.to_string()));
                }
            }
            is_submitting.set(false);
        });
    };

    let password_type = if show_password() { InputType::Text } else { InputType::Password };

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-purple-900 via-blue-900 to-indigo-900 flex items-center justify-center p-4",
            div { class: "w-full max-w-md",
                Card {
                    title: "Log in",
                    subtitle: Some("Welcome back to MiRedSocial".to_string()),

                    if let Some(message) = notice.clone() {
                        Banner { message: message, success: true }
                    }
                    if let Some(message) = error.cloned() {
                        Banner { message: message }
                    }

                    form { class: "flex flex-col gap-4", onsubmit: handle_submit,
                        TextInput {
                            label: "Email".to_string(),
                            value: email.cloned(),
                            placeholder: Some("you@example.com".to_string()),
                            input_type: Some(InputType::Email),
                            error: error_for(&field_errors.read(), "email"),
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                        TextInput {
                            label: "Password".to_string(),
                            value: password.cloned(),
                            placeholder: Some("••••••••".to_string()),
                            input_type: Some(password_type),
                            error: error_for(&field_errors.read(), "password"),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            variant: ButtonVariant::Link,
                            class: "px-0",
                            onclick: move |_| show_password.toggle(),
                            if show_password() { "Hide password" } else { "Show password" }
                        }
                        Button {
                            submit: true,
                            busy: is_submitting(),
                            class: "w-full",
                            if is_submitting() { "Logging in..." } else { "Log in" }
                        }
                    }

                    div { class: "mt-6 text-center text-sm text-blue-200",
                        "No account yet? "
                        Link { class: "text-blue-400 hover:text-blue-300 font-medium", to: Route::Register {}, "Sign up" }
                    }
                }
            }
        }
    }
}
