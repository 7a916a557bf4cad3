use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBullhorn, FaHandHoldingDollar, FaUserPlus},
    Icon,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, StatCard},
        constant::SITE_NAME,
        model::{auth::AuthContext, cache::Cache, clock::local_today},
        route::admin::PageHeader,
        router::Route,
    },
    model::dashboard::DashboardStatsDto,
    util::format::{format_currency, format_long_date, month_name_malay},
};

#[cfg(feature = "web")]
use crate::client::api::dashboard::get_dashboard_stats;

#[component]
pub fn Dashboard() -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut auth_context = use_context::<AuthContext>();
    #[allow(unused_mut)]
    let mut stats = use_signal(Cache::<DashboardStatsDto>::default);

    #[cfg(feature = "web")]
    use_future(move || async move {
        let result = get_dashboard_stats().await;
        if let Err(err) = &result {
            tracing::error!("Failed to fetch dashboard stats: {}", err);
            auth_context.handle_unauthorized(err);
        }
        stats.set(result.into());
    });

    let today = local_today();
    let greeting = auth_context
        .read()
        .admin()
        .map(|admin| format!("Selamat datang, {}", admin.display_name));
    let month_label = format!("{} {}", month_name_malay(today.month()), today.year());

    rsx! {
        Title { "Papan Pemuka | {SITE_NAME}" }
        PageHeader {
            title: "Papan Pemuka".to_string(),
            subtitle: greeting.unwrap_or_else(|| format_long_date(today)),
        }
        match &*stats.read() {
            Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! { ErrorPage { status: err.status, message: err.message.clone() } },
            Cache::Fetched(stats) => rsx! {
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-4 gap-4 mb-8",
                    StatCard {
                        title: "Jumlah Ahli".to_string(),
                        value: stats.total_members.to_string(),
                        subtitle: format!("{} aktif", stats.active_members),
                        accent: "border-primary",
                    }
                    StatCard {
                        title: "Jumlah Derma".to_string(),
                        value: format_currency(stats.total_donations),
                        accent: "border-success",
                    }
                    StatCard {
                        title: "Derma Bulan Ini".to_string(),
                        value: format_currency(stats.monthly_donations),
                        subtitle: month_label.clone(),
                        accent: "border-info",
                    }
                    StatCard {
                        title: "Pengumuman Aktif".to_string(),
                        value: stats.published_announcements.to_string(),
                        accent: "border-warning",
                    }
                }
            },
        }
        div {
            class: "card bg-base-100 shadow-sm",
            div {
                class: "card-body",
                h2 { class: "card-title mb-2", "Tindakan Pantas" }
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-3",
                    Link {
                        to: Route::NewMember {},
                        class: "btn btn-outline gap-2",
                        Icon { width: 16, height: 16, icon: FaUserPlus }
                        "Tambah Ahli"
                    }
                    Link {
                        to: Route::NewDonation {},
                        class: "btn btn-outline gap-2",
                        Icon { width: 16, height: 16, icon: FaHandHoldingDollar }
                        "Rekod Derma"
                    }
                    Link {
                        to: Route::NewAnnouncement {},
                        class: "btn btn-outline gap-2",
                        Icon { width: 16, height: 16, icon: FaBullhorn }
                        "Buat Pengumuman"
                    }
                }
            }
        }
    }
}
