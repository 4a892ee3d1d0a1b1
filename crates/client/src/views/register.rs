use dioxus::prelude::*;
use redsocial_core::log_error;
use redsocial_shared::RegisterData;

use crate::auth_session::AuthContext;
use crate::components::ui::{Banner, Button, ButtonVariant, Card, InputType, TextInput};
use crate::forms::registration_errors;
use crate::stores::set_flash;
use crate::Route;

#[component]
pub fn Register() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut alias = use_signal(String::new);
    let mut birth_date = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut errors = use_signal(Vec::<String>::new);
    let mut is_submitting = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        if is_submitting() {
            return;
        }

        let data = RegisterData {
            email: email.read().trim().to_string(),
            password: password.cloned(),
            first_name: first_name.cloned(),
            last_name: last_name.cloned(),
            alias: alias.cloned(),
            birth_date: birth_date.cloned(),
            extra: Default::default(),
        };

        let invalid = registration_errors(&data);
        if !invalid.is_empty() {
            errors.set(invalid.into_iter().map(|e| e.message.to_string()).collect());
            return;
        }

        is_submitting.set(true);
        errors.set(Vec::new());

        let auth = auth.clone();
        spawn(async move {
            match auth.api().auth.register(&data).await {
                Ok(()) => {
                    set_flash("Account created, you can log in now");
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    log_error!("Register error: {err}");
                    errors.set(vec!["Registration failed".to_string()]);
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
                    title: "Create an account",
                    subtitle: Some("Fill in the fields to sign up".to_string()),

                    for message in errors.read().iter() {
                        Banner { key: "{message}", message: message.clone() }
                    }

                    form { class: "space-y-4", onsubmit: handle_submit,
                        TextInput {
                            label: "Email".to_string(),
                            value: email.cloned(),
                            placeholder: Some("you@example.com".to_string()),
                            input_type: Some(InputType::Email),
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                        TextInput {
                            label: "Password".to_string(),
                            value: password.cloned(),
                            placeholder: Some("••••••••".to_string()),
                            input_type: Some(password_type),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            variant: ButtonVariant::Link,
                            class: "px-0",
                            onclick: move |_| show_password.toggle(),
                            if show_password() { "Hide password" } else { "Show password" }
                        }
                        TextInput {
                            label: "First name".to_string(),
                            value: first_name.cloned(),
                            placeholder: Some("Your first name".to_string()),
                            oninput: move |e: FormEvent| first_name.set(e.value()),
                        }
                        TextInput {
                            label: "Last name".to_string(),
                            value: last_name.cloned(),
                            placeholder: Some("Your last name".to_string()),
                            oninput: move |e: FormEvent| last_name.set(e.value()),
                        }
                        TextInput {
                            label: "Alias".to_string(),
                            value: alias.cloned(),
                            placeholder: Some("Unique alias".to_string()),
                            oninput: move |e: FormEvent| alias.set(e.value()),
                        }
                        TextInput {
                            label: "Birth date".to_string(),
                            value: birth_date.cloned(),
                            input_type: Some(InputType::Date),
                            oninput: move |e: FormEvent| birth_date.set(e.value()),
                        }
                        Button {
                            submit: true,
                            busy: is_submitting(),
                            class: "w-full",
                            if is_submitting() { "Signing up..." } else { "Sign up" }
                        }
                    }

                    div { class: "mt-6 text-center text-sm text-blue-200",
                        "Already have an account? "
                        Link { class: "text-blue-400 hover:text-blue-300 font-medium", to: Route::Login {}, "Log in" }
                    }
                }
            }
        }
    }
}
