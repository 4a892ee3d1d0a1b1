use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Date,
}

impl InputType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    #[props(optional)]
    pub placeholder: Option<String>,
    #[props(optional)]
    pub input_type: Option<InputType>,
    /// Validation message; outlines the input in red when set
    #[props(optional)]
    pub error: Option<String>,
}

/// Labelled single-line input.
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let error = props.error.clone();
    let border = if error.is_some() { "border-red-400" } else { "border-white/30" };
    let class = format!("w-full p-3 rounded-lg bg-white/10 border {border} text-white placeholder-blue-300 focus:outline-none focus:ring-2 focus:ring-blue-400 transition");

    rsx! {
        label { class: "block",
            span { class: "block text-blue-200 mb-1 text-sm", "{props.label}" }
            input {
                class,
                r#type: props.input_type.unwrap_or_default().as_str(),
                value: "{props.value}",
                placeholder: props.placeholder.unwrap_or_default(),
                oninput: move |e| props.oninput.call(e),
            }
            if let Some(message) = error {
                p { class: "mt-1 text-sm text-red-400", "{message}" }
            }
        }
    }
}
