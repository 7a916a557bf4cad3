use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        route::public::component::AnnouncementCard,
    },
    model::announcement::AnnouncementDto,
};

#[cfg(feature = "web")]
use crate::client::api::announcement::get_published_announcements;

/// Published announcements loaded so far plus where the next page starts.
#[derive(Clone, Default, PartialEq)]
struct Feed {
    items: Vec<AnnouncementDto>,
    next_cursor: Option<String>,
    has_more: bool,
    loaded: bool,
}

#[component]
pub fn Announcements() -> Element {
    #[allow(unused_mut)]
    let mut feed = use_signal(Feed::default);
    let mut error = use_signal(|| None::<ApiError>);
    #[allow(unused_mut)]
    let mut is_loading = use_signal(|| false);

    // Appends the page after the current cursor
    #[allow(unused_variables)]
    let load_page = move |_: ()| async move {
        #[cfg(feature = "web")]
        {
            if is_loading() {
                return;
            }
            is_loading.set(true);
            let cursor = feed.peek().next_cursor.clone();
            match get_published_announcements(cursor).await {
                Ok(page) => {
                    let mut feed = feed.write();
                    feed.items.extend(page.announcements);
                    feed.next_cursor = page.next_cursor;
                    feed.has_more = page.has_more;
                    feed.loaded = true;
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch announcements: {}", err);
                    error.set(Some(err));
                }
            }
            is_loading.set(false);
        }
    };

    use_future(move || load_page(()));

    let current = feed.read().clone();

    rsx! {
        Title { "Pengumuman | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-4xl flex flex-col gap-4",
                h1 { class: "text-3xl md:text-4xl font-bold text-center mb-4", "Pengumuman" }
                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err.message}" }
                }
                if !current.loaded && error().is_none() {
                    LoadingPage {}
                } else if current.loaded && current.items.is_empty() {
                    p { class: "text-center opacity-60 py-10", "Tiada pengumuman buat masa ini" }
                }
                for item in current.items.iter().cloned() {
                    AnnouncementCard { key: "{item.id}", announcement: item, preview: false }
                }
                if current.has_more {
                    button {
                        class: "btn btn-outline self-center",
                        disabled: is_loading(),
                        onclick: move |_| load_page(()),
                        if is_loading() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                        }
                        "Muat lagi"
                    }
                }
            }
        }
    }
}
