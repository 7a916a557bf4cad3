use dioxus::prelude::*;

use crate::{
    client::{component::Markdown, model::clock::local_offset},
    model::announcement::{AnnouncementDto, Priority},
    util::format::{format_date_time, truncate_text},
};

/// Characters shown of an announcement body in preview mode.
const PREVIEW_CHARS: usize = 160;

fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge badge-error",
        Priority::Medium => "badge badge-warning",
        Priority::Low => "badge badge-ghost",
    }
}

/// Published announcement; `preview` shows a plain-text excerpt instead of the full body.
#[component]
pub fn AnnouncementCard(announcement: AnnouncementDto, preview: bool) -> Element {
    let posted = format_date_time(announcement.created_at, &local_offset());

    rsx! {
        article {
            class: "card bg-base-100 shadow-md",
            div {
                class: "card-body",
                div {
                    class: "flex flex-wrap gap-2",
                    span { class: "badge badge-primary", "{announcement.category.label()}" }
                    span { class: priority_badge(announcement.priority), "{announcement.priority.label()}" }
                }
                h3 { class: "card-title", "{announcement.title}" }
                if preview {
                    p { class: "opacity-80", "{truncate_text(&announcement.content, PREVIEW_CHARS)}" }
                } else {
                    Markdown { source: announcement.content.clone() }
                }
                p { class: "text-xs opacity-50", "{announcement.author} · {posted}" }
            }
        }
    }
}
