pub mod admin;
pub mod public;

use dioxus::prelude::*;

use crate::client::{
    component::{ErrorPage, Page},
    router::Route,
};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;

    rsx! {
        Title { "Halaman tidak dijumpai" }
        Page {
            class: "flex flex-col items-center",
            ErrorPage { status: 404, message: "Halaman tidak dijumpai".to_string() }
            Link { to: Route::Home {}, class: "btn btn-primary", "Kembali ke Laman Utama" }
        }
    }
}
