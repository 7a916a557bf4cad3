use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaPenToSquare, FaTrash},
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
    model::member::MemberDto,
    util::format::{format_date, format_date_time, format_ic_number, format_phone_number},
};

#[cfg(feature = "web")]
use crate::client::api::member::{delete_member, get_member};

#[component]
pub fn MemberDetail(id: i32) -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut auth_context = use_context::<AuthContext>();
    #[allow(unused_mut)]
    let mut member = use_signal(Cache::<MemberDto>::default);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_member(id).await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch member {}: {}", id, err);
                auth_context.handle_unauthorized(err);
            }
            member.set(result.clone().into());
        }
    });

    rsx! {
        Title { "Maklumat Ahli | {SITE_NAME}" }
        match &*member.read() {
            Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! { ErrorPage { status: err.status, message: err.message.clone() } },
            Cache::Fetched(member) => rsx! { MemberProfile { member: member.clone() } },
        }
    }
}

#[component]
fn MemberProfile(member: MemberDto) -> Element {
    let nav = navigator();
    let mut show_delete_modal = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<ApiError>);

    let id = member.id;
    let offset = local_offset();
    let rows = [
        ("No. KP", format_ic_number(&member.ic_number)),
        ("Telefon", format_phone_number(&member.phone_number)),
        ("Email", member.email.clone().unwrap_or_else(|| "-".to_string())),
        ("Jantina", member.gender.label().to_string()),
        (
            "Tarikh Lahir",
            member.date_of_birth.map(format_date).unwrap_or_else(|| "-".to_string()),
        ),
        (
            "Alamat",
            format!(
                "{}, {} {}, {}",
                member.address, member.postcode, member.city, member.state
            ),
        ),
        ("Didaftarkan", format_date_time(member.created_at, &offset)),
        ("Dikemas kini", format_date_time(member.updated_at, &offset)),
    ];

    let on_delete = move |_: ()| async move {
        is_deleting.set(true);

        #[cfg(feature = "web")]
        match delete_member(id).await {
            Ok(()) => {
                show_delete_modal.set(false);
                nav.push(Route::Members {});
            }
            Err(err) => {
                tracing::error!("Failed to delete member {}: {}", id, err);
                delete_error.set(Some(err));
            }
        }

        is_deleting.set(false);
    };

    rsx! {
        PageHeader {
            title: member.full_name.clone(),
            subtitle: member.status.label().to_string(),
            back: Route::Members {},
            actions: rsx! {
                Link {
                    to: Route::EditMember { id },
                    class: "btn btn-outline gap-2",
                    Icon { width: 14, height: 14, icon: FaPenToSquare }
                    "Kemaskini"
                }
                button {
                    class: "btn btn-error gap-2",
                    onclick: move |_| {
                        delete_error.set(None);
                        show_delete_modal.set(true);
                    },
                    Icon { width: 14, height: 14, icon: FaTrash }
                    "Padam"
                }
            },
        }
        div {
            class: "card bg-base-100 shadow-sm",
            div {
                class: "card-body",
                dl {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    for (label, value) in rows {
                        div {
                            dt { class: "text-sm opacity-60", "{label}" }
                            dd { class: "font-medium", "{value}" }
                        }
                    }
                }
                if !member.notes.trim().is_empty() {
                    div {
                        class: "mt-4",
                        p { class: "text-sm opacity-60", "Catatan" }
                        p { class: "whitespace-pre-line", "{member.notes}" }
                    }
                }
            }
        }
        ConfirmationModal {
            show: show_delete_modal,
            title: "Padam Ahli".to_string(),
            message: rsx! {
                p { "Adakah anda pasti mahu memadam {member.full_name}? Tindakan ini tidak boleh dibatalkan." }
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
