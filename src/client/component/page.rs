use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-20 p-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        div {
            class: "flex items-center justify-center w-full min-h-[60vh]",
            span { class: "loading loading-spinner loading-lg text-primary" }
        }
    )
}

#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        div {
            class: "flex flex-col gap-2 items-center justify-center w-full min-h-[60vh] text-center",
            p { class: "text-5xl font-bold opacity-40", "{status}" }
            p { class: "text-lg", "{message}" }
        }
    )
}
