use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, FormField, LoadingPage, Markdown, SubmitButton},
        constant::SITE_NAME,
        model::{auth::AuthContext, cache::Cache},
        route::admin::PageHeader,
        router::Route,
    },
    model::announcement::{AnnouncementCategory, AnnouncementDto, AnnouncementFormDto, Priority},
    util::validate::ValidationErrors,
};

#[cfg(feature = "web")]
use crate::client::api::announcement::{
    create_announcement, get_announcement, update_announcement,
};

#[component]
pub fn NewAnnouncement() -> Element {
    rsx! {
        Title { "Buat Pengumuman | {SITE_NAME}" }
        PageHeader {
            title: "Buat Pengumuman".to_string(),
            back: Route::AdminAnnouncements {},
        }
        AnnouncementForm { announcement_id: None, initial: AnnouncementFormDto::default() }
    }
}

#[component]
pub fn EditAnnouncement(id: i32) -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut auth_context = use_context::<AuthContext>();
    #[allow(unused_mut)]
    let mut announcement = use_signal(Cache::<AnnouncementDto>::default);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_announcement(id).await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch announcement {}: {}", id, err);
                auth_context.handle_unauthorized(err);
            }
            announcement.set(result.clone().into());
        }
    });

    rsx! {
        Title { "Kemaskini Pengumuman | {SITE_NAME}" }
        PageHeader {
            title: "Kemaskini Pengumuman".to_string(),
            back: Route::AdminAnnouncements {},
        }
        match &*announcement.read() {
            Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! { ErrorPage { status: err.status, message: err.message.clone() } },
            Cache::Fetched(existing) => rsx! {
                AnnouncementForm {
                    announcement_id: Some(id),
                    initial: AnnouncementFormDto {
                        title: existing.title.clone(),
                        content: existing.content.clone(),
                        category: existing.category,
                        priority: existing.priority,
                        published: existing.published,
                    },
                }
            },
        }
    }
}

#[component]
fn AnnouncementForm(announcement_id: Option<i32>, initial: AnnouncementFormDto) -> Element {
    let nav = navigator();
    let mut form = use_signal(|| initial.clone());
    let mut errors = use_signal(ValidationErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);
    let mut show_preview = use_signal(|| false);

    let on_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if is_submitting() {
            return;
        }

        let payload = form();
        if let Err(invalid) = payload.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(ValidationErrors::new());
        submit_error.set(None);
        is_submitting.set(true);

        #[cfg(feature = "web")]
        {
            let result = match announcement_id {
                Some(id) => update_announcement(id, &payload).await,
                None => create_announcement(&payload).await,
            };
            match result {
                Ok(_) => {
                    nav.push(Route::AdminAnnouncements {});
                }
                Err(err) => {
                    tracing::error!("Failed to save announcement: {}", err);
                    errors.set(err.field_errors());
                    submit_error.set(Some(err.message));
                }
            }
        }

        is_submitting.set(false);
    };

    let field_error = move |field: &str| errors.read().get(field).map(str::to_string);
    let current = form();

    rsx! {
        form {
            class: "card bg-base-100 shadow-sm max-w-4xl",
            onsubmit: on_submit,
            div {
                class: "card-body",
                if let Some(message) = submit_error() {
                    div { class: "alert alert-error mb-2", "{message}" }
                }
                FormField {
                    label: "Tajuk",
                    required: true,
                    error: field_error("title"),
                    input {
                        class: "input w-full",
                        value: "{current.title}",
                        oninput: move |evt| form.write().title = evt.value(),
                    }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-x-6",
                    FormField {
                        label: "Kategori",
                        required: true,
                        select {
                            class: "select w-full",
                            onchange: move |evt| {
                                if let Ok(category) = evt.value().parse::<AnnouncementCategory>() {
                                    form.write().category = category;
                                }
                            },
                            for category in AnnouncementCategory::ALL {
                                option { value: category.as_str(), selected: current.category == *category, "{category.label()}" }
                            }
                        }
                    }
                    FormField {
                        label: "Keutamaan",
                        required: true,
                        select {
                            class: "select w-full",
                            onchange: move |evt| {
                                if let Ok(priority) = evt.value().parse::<Priority>() {
                                    form.write().priority = priority;
                                }
                            },
                            for priority in Priority::ALL {
                                option { value: priority.as_str(), selected: current.priority == *priority, "{priority.label()}" }
                            }
                        }
                    }
                }
                FormField {
                    label: "Kandungan",
                    required: true,
                    error: field_error("content"),
                    div {
                        class: "tabs tabs-border mb-2",
                        button {
                            r#type: "button",
                            class: if show_preview() { "tab" } else { "tab tab-active" },
                            onclick: move |_| show_preview.set(false),
                            "Tulis"
                        }
                        button {
                            r#type: "button",
                            class: if show_preview() { "tab tab-active" } else { "tab" },
                            onclick: move |_| show_preview.set(true),
                            "Pratonton"
                        }
                    }
                    if show_preview() {
                        div {
                            class: "border border-base-300 rounded-box p-4 min-h-48",
                            Markdown { source: current.content.clone() }
                        }
                    } else {
                        textarea {
                            class: "textarea w-full min-h-48 font-mono",
                            placeholder: "Markdown disokong, contohnya **tebal** dan senarai",
                            value: "{current.content}",
                            oninput: move |evt| form.write().content = evt.value(),
                        }
                    }
                }
                label {
                    class: "label gap-3 mt-2",
                    input {
                        r#type: "checkbox",
                        class: "toggle toggle-primary",
                        checked: current.published,
                        onchange: move |evt| form.write().published = evt.checked(),
                    }
                    "Terbitkan kepada umum"
                }
                div {
                    class: "card-actions justify-end mt-4",
                    Link { to: Route::AdminAnnouncements {}, class: "btn", "Batal" }
                    SubmitButton { is_submitting: is_submitting(), label: "Simpan", submitting_label: "Menyimpan..." }
                }
            }
        }
    }
}
