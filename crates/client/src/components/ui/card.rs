use dioxus::prelude::*;

/// Frosted panel with a gradient title.
#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    #[props(into)]
    pub title: String,
    #[props(optional)]
    pub subtitle: Option<String>,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div { class: "bg-white/10 backdrop-blur-lg border border-white/20 rounded-2xl p-8 shadow-2xl text-white",
            div { class: "text-center mb-6",
                h2 { class: "text-3xl font-bold bg-gradient-to-r from-purple-400 to-blue-400 text-transparent bg-clip-text",
                    "{props.title}"
                }
                if let Some(sub) = &props.subtitle {
                    p { class: "mt-2 text-sm text-blue-200/80", "{sub}" }
                }
            }
            {props.children}
        }
    }
}

/// Inline error or notice shown above a form.
#[derive(Props, Clone, PartialEq)]
pub struct BannerProps {
    pub message: String,
    #[props(default)]
    pub success: bool,
}

#[component]
pub fn Banner(props: BannerProps) -> Element {
    let class = if props.success {
        "mb-4 p-3 bg-green-500/10 border border-green-500/30 rounded-lg text-green-300 text-sm"
    } else {
        "mb-4 p-3 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm"
    };

    rsx! {
        div { class, "{props.message}" }
    }
}
