use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBars, FaBullhorn, FaClock, FaMosque, FaPhone, FaXmark},
    Icon,
};

use crate::client::{
    constant::{SITE_NAME, SITE_SHORT_NAME},
    router::Route,
};

#[derive(Clone, Copy, PartialEq)]
enum NavIcon {
    Home,
    Prayer,
    Announcement,
    Contact,
}

fn nav_links() -> [(Route, &'static str, NavIcon); 4] {
    [
        (Route::Home {}, "Laman Utama", NavIcon::Home),
        (Route::PrayerTimes {}, "Waktu Solat", NavIcon::Prayer),
        (Route::Announcements {}, "Pengumuman", NavIcon::Announcement),
        (Route::Contact {}, "Hubungi Kami", NavIcon::Contact),
    ]
}

#[component]
fn NavIconView(icon: NavIcon, size: u32) -> Element {
    match icon {
        NavIcon::Home => rsx!(Icon { width: size, height: size, icon: FaMosque }),
        NavIcon::Prayer => rsx!(Icon { width: size, height: size, icon: FaClock }),
        NavIcon::Announcement => rsx!(Icon { width: size, height: size, icon: FaBullhorn }),
        NavIcon::Contact => rsx!(Icon { width: size, height: size, icon: FaPhone }),
    }
}

/// Public site navigation bar.
#[component]
pub fn Header() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx!(
        nav {
            class: "fixed w-full h-16 bg-primary text-primary-content shadow-lg z-20",
            div {
                class: "flex justify-between items-center h-full max-w-6xl mx-auto px-4",
                Link {
                    to: Route::Home {},
                    class: "flex items-center gap-2 font-bold text-xl",
                    Icon { width: 28, height: 28, icon: FaMosque }
                    span { class: "hidden sm:inline", "{SITE_NAME}" }
                    span { class: "sm:hidden", "{SITE_SHORT_NAME}" }
                }
                div {
                    class: "hidden md:flex gap-1",
                    for (route, label, icon) in nav_links() {
                        Link {
                            to: route,
                            class: "btn btn-ghost btn-sm gap-2",
                            NavIconView { icon, size: 14 }
                            "{label}"
                        }
                    }
                }
                button {
                    class: "md:hidden btn btn-ghost btn-square",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() {
                        Icon { width: 22, height: 22, icon: FaXmark }
                    } else {
                        Icon { width: 22, height: 22, icon: FaBars }
                    }
                }
            }
            if menu_open() {
                div {
                    class: "md:hidden flex flex-col gap-1 px-4 pb-4 bg-primary",
                    for (route, label, icon) in nav_links() {
                        Link {
                            to: route,
                            class: "btn btn-ghost justify-start gap-3",
                            onclick: move |_| menu_open.set(false),
                            NavIconView { icon, size: 18 }
                            "{label}"
                        }
                    }
                }
            }
        }
    )
}
