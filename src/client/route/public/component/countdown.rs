use chrono::NaiveTime;
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaClock, Icon};

use crate::{
    client::model::clock::local_now,
    prayer::{format_remaining, next_prayer, remaining_duration, PrayerSet},
};

/// Current local clock time, ticking once per second while mounted.
pub fn use_clock() -> Signal<NaiveTime> {
    #[allow(unused_mut)]
    let mut now = use_signal(|| local_now().time());

    // Dropped with the component, which stops the ticking
    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(1_000).await;
            now.set(local_now().time());
        }
    });

    now
}

/// Next prayer name with a live countdown.
#[component]
pub fn NextPrayerCountdown(prayer: PrayerSet) -> Element {
    let now = use_clock();

    let Ok(next) = next_prayer(&prayer, now()) else {
        return rsx! {
            div {
                class: "alert alert-warning",
                "Waktu solat hari ini tidak sah"
            }
        };
    };
    let remaining = format_remaining(remaining_duration(next.time, now()));
    let at = next.time.format("%H:%M").to_string();
    let label = next.label();

    rsx! {
        div {
            class: "card bg-primary text-primary-content shadow-xl",
            div {
                class: "card-body flex flex-col md:flex-row items-center justify-between gap-6",
                div {
                    class: "flex items-center gap-4",
                    div {
                        class: "rounded-full bg-white/20 p-4",
                        Icon { width: 36, height: 36, icon: FaClock }
                    }
                    div {
                        p { class: "text-sm opacity-80", "Solat Seterusnya" }
                        h2 { class: "text-3xl md:text-4xl font-bold", "{label}" }
                    }
                }
                div {
                    class: "text-center md:text-right",
                    p { class: "text-sm opacity-80", "Masa Berbaki" }
                    p {
                        class: "text-2xl md:text-3xl font-bold font-mono tabular-nums bg-white/20 rounded-xl px-6 py-3",
                        "{remaining}"
                    }
                    p { class: "text-sm opacity-80 mt-2", "pada {at}" }
                }
            }
        }
    }
}
