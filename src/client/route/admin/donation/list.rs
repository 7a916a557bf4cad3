use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaFileCsv, FaMagnifyingGlass, FaPlus},
    Icon,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, StatCard},
        constant::SITE_NAME,
        model::{auth::AuthContext, cache::Cache, query::donations_url},
        route::admin::PageHeader,
        router::Route,
    },
    model::donation::{
        DateBucket, DonationCategory, DonationDto, DonationListDto, DonationListQuery,
        DonationStatsDto, PaymentMethod,
    },
    util::format::{format_currency, format_date},
};

#[cfg(feature = "web")]
use crate::client::api::donation::get_donations;

#[component]
pub fn Donations() -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut auth_context = use_context::<AuthContext>();
    let mut query = use_signal(DonationListQuery::default);
    #[allow(unused_mut)]
    let mut donations = use_signal(Cache::<DonationListDto>::default);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_donations(&query()).await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch donations: {}", err);
                auth_context.handle_unauthorized(err);
            }
            donations.set(result.clone().into());
        }
    });

    let export_href = donations_url("/api/admin/donations/export", &query.read());

    rsx! {
        Title { "Derma | {SITE_NAME}" }
        PageHeader {
            title: "Derma".to_string(),
            subtitle: "Rekod derma, zakat dan sedekah".to_string(),
            actions: rsx! {
                a {
                    href: "{export_href}",
                    download: "",
                    class: "btn btn-outline gap-2",
                    Icon { width: 14, height: 14, icon: FaFileCsv }
                    "Eksport CSV"
                }
                Link {
                    to: Route::NewDonation {},
                    class: "btn btn-primary gap-2",
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Rekod Derma"
                }
            },
        }
        match &*donations.read() {
            Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! { ErrorPage { status: err.status, message: err.message.clone() } },
            Cache::Fetched(list) => rsx! {
                DonationStats { stats: list.stats.clone() }
                div {
                    class: "card bg-base-100 shadow-sm mb-4",
                    div {
                        class: "card-body grid grid-cols-1 md:grid-cols-4 gap-3",
                        label {
                            class: "input w-full",
                            Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                            input {
                                r#type: "search",
                                placeholder: "Cari penderma, rujukan atau catatan",
                                value: "{query.read().search.clone().unwrap_or_default()}",
                                oninput: move |evt| query.write().search = Some(evt.value()),
                            }
                        }
                        select {
                            class: "select w-full",
                            onchange: move |evt| query.write().category = evt.value().parse().ok(),
                            option { value: "", "Semua Kategori" }
                            for category in DonationCategory::ALL {
                                option {
                                    value: category.as_str(),
                                    selected: query.read().category == Some(*category),
                                    "{category.label()}"
                                }
                            }
                        }
                        select {
                            class: "select w-full",
                            onchange: move |evt| query.write().payment_method = evt.value().parse().ok(),
                            option { value: "", "Semua Kaedah" }
                            for method in PaymentMethod::ALL {
                                option {
                                    value: method.as_str(),
                                    selected: query.read().payment_method == Some(*method),
                                    "{method.label()}"
                                }
                            }
                        }
                        select {
                            class: "select w-full",
                            onchange: move |evt| query.write().bucket = evt.value().parse().ok(),
                            option { value: "", "Semua Tarikh" }
                            for bucket in DateBucket::ALL {
                                option {
                                    value: bucket.as_str(),
                                    selected: query.read().bucket == Some(*bucket),
                                    "{bucket.label()}"
                                }
                            }
                        }
                    }
                }
                DonationTable { donations: list.donations.clone() }
            },
        }
    }
}

/// Sums over every donation, whatever the filters show.
#[component]
fn DonationStats(stats: DonationStatsDto) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-4 gap-4 mb-6",
            StatCard { title: "Jumlah Keseluruhan".to_string(), value: format_currency(stats.total), accent: "border-primary" }
            StatCard { title: "Hari Ini".to_string(), value: format_currency(stats.today), accent: "border-success" }
            StatCard { title: "Bulan Ini".to_string(), value: format_currency(stats.this_month), accent: "border-info" }
            StatCard { title: "Tahun Ini".to_string(), value: format_currency(stats.this_year), accent: "border-warning" }
        }
    }
}

#[component]
fn DonationTable(donations: Vec<DonationDto>) -> Element {
    let filtered_total: i64 = donations.iter().map(|d| d.amount).sum();

    rsx! {
        div {
            class: "card bg-base-100 shadow-sm",
            div {
                class: "card-body",
                p {
                    class: "text-sm opacity-60",
                    "{donations.len()} rekod · {format_currency(filtered_total)}"
                }
                if donations.is_empty() {
                    div { class: "text-center py-8 opacity-50", "Tiada rekod derma dijumpai" }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    th { "Tarikh" }
                                    th { "Penderma" }
                                    th { class: "text-right", "Jumlah" }
                                    th { "Kategori" }
                                    th { "Kaedah Bayaran" }
                                    th { "Rujukan" }
                                }
                            }
                            tbody {
                                for donation in donations {
                                    tr {
                                        key: "{donation.id}",
                                        td { "{format_date(donation.date)}" }
                                        td { {donation.donor_name.clone().unwrap_or_else(|| "Tanpa Nama".to_string())} }
                                        td { class: "text-right font-mono", "{format_currency(donation.amount)}" }
                                        td { span { class: "badge badge-outline", "{donation.category.label()}" } }
                                        td { "{donation.payment_method.label()}" }
                                        td { {donation.reference_number.clone().unwrap_or_else(|| "-".to_string())} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
