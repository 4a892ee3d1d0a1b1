use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Danger,
    Link,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "bg-gradient-to-r from-blue-600 to-purple-600 text-white py-3 hover:from-blue-700 hover:to-purple-700 hover:shadow-xl",
            Self::Danger => "bg-red-500 text-white py-3 hover:bg-red-600 hover:shadow-xl",
            Self::Link => "text-xs text-blue-200 hover:text-white",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    /// Render as the form's submit button
    #[props(default)]
    pub submit: bool,
    /// Disables the button while a request is in flight
    #[props(default)]
    pub busy: bool,
    #[props(into, default)]
    pub class: String,
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = format!(
        "rounded-xl px-4 font-semibold transition-all duration-300 disabled:opacity-50 {} {}",
        props.variant.class(),
        props.class
    );
    let onclick = props.onclick;

    rsx! {
        button {
            class,
            r#type: if props.submit { "submit" } else { "button" },
            disabled: props.busy,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
