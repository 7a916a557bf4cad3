use dioxus::prelude::*;

use crate::client::{component::Header, constant::SITE_NAME, router::Route};

#[component]
pub fn Layout() -> Element {
    rsx!(
        div {
            class: "flex flex-col min-h-screen bg-base-200",
            Header {}
            main {
                class: "flex-1",
                Outlet::<Route> {}
            }
            footer {
                class: "footer footer-center p-6 bg-neutral text-neutral-content",
                p { "© {SITE_NAME}. Hak cipta terpelihara." }
                Link {
                    to: Route::AdminLogin {},
                    class: "link link-hover text-xs opacity-60",
                    "Log Masuk Pentadbir"
                }
            }
        }
    )
}
