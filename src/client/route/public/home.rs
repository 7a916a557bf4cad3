use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBullhorn, FaClock, FaPhone},
    Icon,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::Page,
        constant::SITE_NAME,
        model::{cache::Cache, clock::local_today},
        route::public::component::{AnnouncementCard, NextPrayerCountdown},
        router::Route,
    },
    model::{announcement::AnnouncementDto, prayer::PrayerTimesDto},
    util::format::format_long_date,
};

#[cfg(feature = "web")]
use crate::client::api::{announcement::get_latest_announcements, prayer::get_prayer_times};

#[component]
pub fn Home() -> Element {
    #[allow(unused_mut)]
    let mut prayer = use_signal(Cache::<PrayerTimesDto>::default);
    #[allow(unused_mut)]
    let mut latest = use_signal(Cache::<Vec<AnnouncementDto>>::default);

    #[cfg(feature = "web")]
    use_future(move || async move {
        let result = get_prayer_times().await;
        if let Err(err) = &result {
            tracing::error!("Failed to fetch prayer times: {}", err);
        }
        prayer.set(result.into());
    });

    #[cfg(feature = "web")]
    use_future(move || async move {
        let result = get_latest_announcements().await;
        if let Err(err) = &result {
            tracing::error!("Failed to fetch latest announcements: {}", err);
        }
        latest.set(result.into());
    });

    let today = format_long_date(local_today());

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center gap-10",
            section {
                class: "w-full max-w-6xl text-center py-10",
                h1 { class: "text-4xl md:text-5xl font-bold mb-3", "Selamat Datang ke {SITE_NAME}" }
                p { class: "text-lg opacity-70", "{today}" }
            }

            section {
                class: "w-full max-w-6xl",
                match &*prayer.read() {
                    Cache::Loading => rsx! {
                        div { class: "skeleton h-40 w-full" }
                    },
                    Cache::Fetched(times) => rsx! {
                        NextPrayerCountdown { prayer: times.prayer.clone() }
                    },
                    Cache::Error(err) => rsx! {
                        div { class: "alert alert-warning", "{err.message}" }
                    },
                }
            }

            section {
                class: "w-full max-w-6xl grid grid-cols-1 md:grid-cols-3 gap-4",
                Link {
                    to: Route::PrayerTimes {},
                    class: "card bg-base-100 shadow-md hover:shadow-lg",
                    div {
                        class: "card-body items-center text-center",
                        Icon { width: 32, height: 32, icon: FaClock }
                        h2 { class: "card-title", "Waktu Solat" }
                        p { class: "opacity-70", "Jadual waktu solat hari ini" }
                    }
                }
                Link {
                    to: Route::Announcements {},
                    class: "card bg-base-100 shadow-md hover:shadow-lg",
                    div {
                        class: "card-body items-center text-center",
                        Icon { width: 32, height: 32, icon: FaBullhorn }
                        h2 { class: "card-title", "Pengumuman" }
                        p { class: "opacity-70", "Berita dan acara terkini" }
                    }
                }
                Link {
                    to: Route::Contact {},
                    class: "card bg-base-100 shadow-md hover:shadow-lg",
                    div {
                        class: "card-body items-center text-center",
                        Icon { width: 32, height: 32, icon: FaPhone }
                        h2 { class: "card-title", "Hubungi Kami" }
                        p { class: "opacity-70", "Alamat dan waktu pejabat" }
                    }
                }
            }

            section {
                class: "w-full max-w-6xl pb-10",
                div {
                    class: "flex items-center justify-between mb-4",
                    h2 { class: "text-2xl font-bold", "Pengumuman Terkini" }
                    Link { to: Route::Announcements {}, class: "link link-primary", "Lihat semua" }
                }
                match &*latest.read() {
                    Cache::Loading => rsx! {
                        div { class: "skeleton h-32 w-full" }
                    },
                    Cache::Fetched(items) if items.is_empty() => rsx! {
                        p { class: "opacity-60", "Tiada pengumuman buat masa ini" }
                    },
                    Cache::Fetched(items) => rsx! {
                        div {
                            class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                            for item in items.iter().cloned() {
                                AnnouncementCard { key: "{item.id}", announcement: item, preview: true }
                            }
                        }
                    },
                    Cache::Error(err) => rsx! {
                        div { class: "alert alert-error", "{err.message}" }
                    },
                }
            }
        }
    }
}
