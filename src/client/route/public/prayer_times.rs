use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{LoadingPage, Page},
        constant::SITE_NAME,
        model::cache::Cache,
        route::public::component::{use_clock, NextPrayerCountdown},
    },
    model::prayer::PrayerTimesDto,
    prayer::{display_time, next_prayer},
};

#[cfg(feature = "web")]
use crate::client::api::prayer::get_prayer_times;

#[component]
pub fn PrayerTimes() -> Element {
    #[allow(unused_mut)]
    let mut prayer = use_signal(Cache::<PrayerTimesDto>::default);

    #[cfg(feature = "web")]
    use_future(move || async move {
        let result = get_prayer_times().await;
        if let Err(err) = &result {
            tracing::error!("Failed to fetch prayer times: {}", err);
        }
        prayer.set(result.into());
    });

    rsx! {
        Title { "Waktu Solat | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-4xl flex flex-col gap-6",
                h1 { class: "text-3xl md:text-4xl font-bold text-center", "Waktu Solat" }
                match &*prayer.read() {
                    Cache::Loading => rsx! { LoadingPage {} },
                    Cache::Error(_) => rsx! {
                        div {
                            class: "alert alert-warning flex flex-col items-start",
                            p { class: "font-semibold", "Waktu solat tidak dapat dimuatkan" }
                            p { class: "text-sm", "Sila cuba sebentar lagi." }
                        }
                    },
                    Cache::Fetched(times) => rsx! {
                        PrayerSchedule { times: times.clone() }
                    },
                }
            }
        }
    }
}

#[component]
fn PrayerSchedule(times: PrayerTimesDto) -> Element {
    let now = use_clock();
    let next_name = next_prayer(&times.prayer, now()).ok().map(|next| next.name);

    rsx! {
        div {
            class: "text-center opacity-70",
            p { "{times.prayer.day}, {times.prayer.date}" }
            p { "{times.prayer.hijri} H · Zon {times.zone}" }
        }
        NextPrayerCountdown { prayer: times.prayer.clone() }
        div {
            class: "grid grid-cols-2 md:grid-cols-4 gap-4",
            for (name, time) in times.prayer.entries() {
                div {
                    key: "{name}",
                    class: if next_name == Some(name) {
                        "card bg-primary text-primary-content shadow-lg"
                    } else {
                        "card bg-base-100 shadow-md"
                    },
                    div {
                        class: "card-body items-center p-5",
                        p { class: "text-sm opacity-80", "{name}" }
                        p { class: "text-2xl font-bold font-mono", "{display_time(time)}" }
                    }
                }
            }
        }
    }
}
