use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut auth_context = use_context_provider(AuthContext::new);

    // Check the session once on first load
    #[cfg(feature = "web")]
    use_future(move || async move {
        auth_context.refresh().await;
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Waktu solat, pengumuman dan pengurusan komuniti {SITE_NAME}"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
