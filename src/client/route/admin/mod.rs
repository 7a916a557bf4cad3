mod announcement;
mod dashboard;
mod donation;
mod login;
mod member;

pub use announcement::{AdminAnnouncements, EditAnnouncement, NewAnnouncement};
pub use dashboard::Dashboard;
pub use donation::{Donations, NewDonation};
pub use login::AdminLogin;
pub use member::{EditMember, MemberDetail, Members, NewMember};

use dioxus::prelude::*;

use crate::client::router::Route;

/// Title row shared by the admin pages, with an optional action on the right.
#[component]
fn PageHeader(
    title: String,
    subtitle: Option<String>,
    back: Option<Route>,
    actions: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: "flex flex-col sm:flex-row sm:items-center justify-between gap-4 mb-6",
            div {
                if let Some(back) = back {
                    Link { to: back, class: "link link-hover text-sm opacity-70", "← Kembali" }
                }
                h1 { class: "text-2xl sm:text-3xl font-bold", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "opacity-60", "{subtitle}" }
                }
            }
            if let Some(actions) = actions {
                div {
                    class: "flex gap-2",
                    {actions}
                }
            }
        }
    }
}
