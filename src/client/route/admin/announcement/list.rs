use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaMagnifyingGlass, FaPenToSquare, FaPlus, FaTrash},
    Icon,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ConfirmationModal, ErrorPage, LoadingPage},
        constant::SITE_NAME,
        model::{auth::AuthContext, cache::Cache, clock::local_offset, error::ApiError},
        route::admin::PageHeader,
        router::Route,
    },
    model::announcement::{AnnouncementCategory, AnnouncementDto, AnnouncementListQuery},
    util::format::{format_date_time, truncate_text},
};

#[cfg(feature = "web")]
use crate::client::api::announcement::{delete_announcement, get_announcements};

#[component]
pub fn AdminAnnouncements() -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut auth_context = use_context::<AuthContext>();
    let mut query = use_signal(AnnouncementListQuery::default);
    #[allow(unused_mut)]
    let mut announcements = use_signal(Cache::<Vec<AnnouncementDto>>::default);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_announcements(&query()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch announcements: {}", err);
                auth_context.handle_unauthorized(err);
            }
            announcements.set(result.clone().into());
        }
    });

    rsx! {
        Title { "Pengumuman | {SITE_NAME}" }
        PageHeader {
            title: "Pengumuman".to_string(),
            subtitle: "Urus pengumuman untuk jemaah".to_string(),
            actions: rsx! {
                Link {
                    to: Route::NewAnnouncement {},
                    class: "btn btn-primary gap-2",
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Buat Pengumuman"
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
                        placeholder: "Cari tajuk atau kandungan",
                        value: "{query.read().search.clone().unwrap_or_default()}",
                        oninput: move |evt| query.write().search = Some(evt.value()),
                    }
                }
                select {
                    class: "select w-full",
                    onchange: move |evt| query.write().category = evt.value().parse().ok(),
                    option { value: "", "Semua Kategori" }
                    for category in AnnouncementCategory::ALL {
                        option { value: category.as_str(), "{category.label()}" }
                    }
                }
                select {
                    class: "select w-full",
                    onchange: move |evt| query.write().published = evt.value().parse().ok(),
                    option { value: "", "Semua Status" }
                    option { value: "true", "Diterbitkan" }
                    option { value: "false", "Draf" }
                }
            }
        }
        match &*announcements.read() {
            Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! { ErrorPage { status: err.status, message: err.message.clone() } },
            Cache::Fetched(list) => rsx! {
                AnnouncementTable { announcements: list.clone(), refetch_trigger }
            },
        }
    }
}

#[component]
fn AnnouncementTable(announcements: Vec<AnnouncementDto>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<(i32, String)>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<ApiError>);
    let offset = local_offset();

    let on_delete = move |_: ()| async move {
        let Some((id, _)) = to_delete() else {
            return;
        };
        is_deleting.set(true);

        #[cfg(feature = "web")]
        match delete_announcement(id).await {
            Ok(()) => {
                refetch_trigger.set(refetch_trigger() + 1);
                show_delete_modal.set(false);
            }
            Err(err) => {
                tracing::error!("Failed to delete announcement {}: {}", id, err);
                delete_error.set(Some(err));
            }
        }

        is_deleting.set(false);
    };

    let delete_title = to_delete().map(|(_, title)| title).unwrap_or_default();

    rsx! {
        div {
            class: "card bg-base-100 shadow-sm",
            div {
                class: "card-body",
                if announcements.is_empty() {
                    div { class: "text-center py-8 opacity-50", "Tiada pengumuman dijumpai" }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    th { "Tajuk" }
                                    th { "Kategori" }
                                    th { "Keutamaan" }
                                    th { "Status" }
                                    th { "Dikemas kini" }
                                    th { class: "text-right", "Tindakan" }
                                }
                            }
                            tbody {
                                for announcement in announcements {
                                    {
                                        let id = announcement.id;
                                        let title = announcement.title.clone();
                                        rsx! {
                                            tr {
                                                key: "{id}",
                                                td {
                                                    p { class: "font-medium", "{announcement.title}" }
                                                    p { class: "text-xs opacity-60", "{truncate_text(&announcement.content, 80)}" }
                                                }
                                                td { "{announcement.category.label()}" }
                                                td { "{announcement.priority.label()}" }
                                                td {
                                                    if announcement.published {
                                                        span { class: "badge badge-success", "Diterbitkan" }
                                                    } else {
                                                        span { class: "badge badge-ghost", "Draf" }
                                                    }
                                                }
                                                td { "{format_date_time(announcement.updated_at, &offset)}" }
                                                td {
                                                    div {
                                                        class: "flex gap-2 justify-end",
                                                        Link {
                                                            to: Route::EditAnnouncement { id },
                                                            class: "btn btn-sm btn-ghost",
                                                            Icon { width: 14, height: 14, icon: FaPenToSquare }
                                                        }
                                                        button {
                                                            class: "btn btn-sm btn-ghost text-error",
                                                            onclick: move |_| {
                                                                to_delete.set(Some((id, title.clone())));
                                                                delete_error.set(None);
                                                                show_delete_modal.set(true);
                                                            },
                                                            Icon { width: 14, height: 14, icon: FaTrash }
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
            }
        }
        ConfirmationModal {
            show: show_delete_modal,
            title: "Padam Pengumuman".to_string(),
            message: rsx! {
                p { "Adakah anda pasti mahu memadam \"{delete_title}\"?" }
                if let Some(err) = delete_error() {
                    div { class: "alert alert-error mt-3", "{err.message}" }
                }
            },
            confirm_text: "Padam".to_string(),
            is_processing: is_deleting(),
            processing_text: "Memadam...".to_string(),
            on_confirm: on_delete,
        }
    }
}
