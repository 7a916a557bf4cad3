use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaFileCsv, FaMagnifyingGlass, FaPlus},
    Icon,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage},
        constant::SITE_NAME,
        model::{auth::AuthContext, cache::Cache, query::members_url},
        route::admin::PageHeader,
        router::Route,
    },
    model::member::{Gender, MemberDto, MemberListQuery, MemberStatus},
    util::format::{format_ic_number, format_phone_number},
};

#[cfg(feature = "web")]
use crate::client::api::member::get_members;

fn status_badge(status: MemberStatus) -> &'static str {
    match status {
        MemberStatus::Active => "badge badge-success",
        MemberStatus::Inactive => "badge badge-ghost",
    }
}

#[component]
pub fn Members() -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut auth_context = use_context::<AuthContext>();
    let mut query = use_signal(MemberListQuery::default);
    #[allow(unused_mut)]
    let mut members = use_signal(Cache::<Vec<MemberDto>>::default);

    // Re-runs whenever a filter changes
    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_members(&query()).await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch members: {}", err);
                auth_context.handle_unauthorized(err);
            }
            members.set(result.clone().into());
        }
    });

    let export_href = members_url("/api/admin/members/export", &query.read());

    rsx! {
        Title { "Ahli Kariah | {SITE_NAME}" }
        PageHeader {
            title: "Ahli Kariah".to_string(),
            subtitle: "Urus maklumat ahli kariah masjid".to_string(),
            actions: rsx! {
                a {
                    href: "{export_href}",
                    download: "",
                    class: "btn btn-outline gap-2",
                    Icon { width: 14, height: 14, icon: FaFileCsv }
                    "Eksport CSV"
                }
                Link {
                    to: Route::NewMember {},
                    class: "btn btn-primary gap-2",
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Tambah Ahli"
                }
            },
        }
        div {
            class: "card bg-base-100 shadow-sm mb-4",
            div {
                class: "card-body grid grid-cols-1 md:grid-cols-3 gap-3",
                label {
                    class: "input w-full",
                    Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                    input {
                        r#type: "search",
                        placeholder: "Cari nama, No. KP, email atau telefon",
                        value: "{query.read().search.clone().unwrap_or_default()}",
                        oninput: move |evt| query.write().search = Some(evt.value()),
                    }
                }
                select {
                    class: "select w-full",
                    onchange: move |evt| query.write().status = evt.value().parse().ok(),
                    option { value: "", "Semua Status" }
                    for status in MemberStatus::ALL {
                        option { value: status.as_str(), "{status.label()}" }
                    }
                }
                select {
                    class: "select w-full",
                    onchange: move |evt| query.write().gender = evt.value().parse().ok(),
                    option { value: "", "Semua Jantina" }
                    for gender in Gender::ALL {
                        option { value: gender.as_str(), "{gender.label()}" }
                    }
                }
            }
        }
        match &*members.read() {
            Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! { ErrorPage { status: err.status, message: err.message.clone() } },
            Cache::Fetched(list) => rsx! {
                MemberTable { members: list.clone() }
            },
        }
    }
}

#[component]
fn MemberTable(members: Vec<MemberDto>) -> Element {
    let nav = navigator();

    rsx! {
        div {
            class: "card bg-base-100 shadow-sm",
            div {
                class: "card-body",
                p { class: "text-sm opacity-60", "{members.len()} ahli" }
                if members.is_empty() {
                    div { class: "text-center py-8 opacity-50", "Tiada ahli dijumpai" }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    th { "Nama" }
                                    th { "No. KP" }
                                    th { "Telefon" }
                                    th { "Bandar" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for member in members {
                                    tr {
                                        key: "{member.id}",
                                        class: "hover cursor-pointer",
                                        onclick: move |_| {
                                            nav.push(Route::MemberDetail { id: member.id });
                                        },
                                        td { class: "font-medium", "{member.full_name}" }
                                        td { "{format_ic_number(&member.ic_number)}" }
                                        td { "{format_phone_number(&member.phone_number)}" }
                                        td { "{member.city}" }
                                        td {
                                            span { class: status_badge(member.status), "{member.status.label()}" }
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
}
