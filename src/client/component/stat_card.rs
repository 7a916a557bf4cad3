use dioxus::prelude::*;

#[component]
pub fn StatCard(title: String, value: String, subtitle: Option<String>, accent: &'static str) -> Element {
    rsx!(
        div {
            class: "card bg-base-100 shadow-sm border-l-4 {accent}",
            div {
                class: "card-body p-5",
                p { class: "text-sm opacity-60", "{title}" }
                p { class: "text-2xl font-bold", "{value}" }
                if let Some(subtitle) = subtitle {
                    p { class: "text-xs opacity-50", "{subtitle}" }
                }
            }
        }
    )
}
