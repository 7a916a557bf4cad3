use chrono::NaiveDate;
use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, FormField, LoadingPage, SubmitButton},
        constant::SITE_NAME,
        model::{auth::AuthContext, cache::Cache},
        route::admin::PageHeader,
        router::Route,
    },
    model::member::{Gender, MemberDto, MemberFormDto, MemberStatus},
    util::validate::{ValidationErrors, MALAYSIAN_STATES},
};

#[cfg(feature = "web")]
use crate::client::api::member::{create_member, get_member, update_member};

fn form_from_member(member: &MemberDto) -> MemberFormDto {
    MemberFormDto {
        full_name: member.full_name.clone(),
        ic_number: member.ic_number.clone(),
        phone_number: member.phone_number.clone(),
        email: member.email.clone(),
        address: member.address.clone(),
        postcode: member.postcode.clone(),
        city: member.city.clone(),
        state: member.state.clone(),
        date_of_birth: member.date_of_birth,
        gender: member.gender,
        status: member.status,
        notes: member.notes.clone(),
    }
}

#[component]
pub fn NewMember() -> Element {
    rsx! {
        Title { "Tambah Ahli | {SITE_NAME}" }
        PageHeader {
            title: "Tambah Ahli Baharu".to_string(),
            back: Route::Members {},
        }
        MemberForm { member_id: None, initial: MemberFormDto::default() }
    }
}

#[component]
pub fn EditMember(id: i32) -> Element {
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
        Title { "Kemaskini Ahli | {SITE_NAME}" }
        PageHeader {
            title: "Kemaskini Ahli".to_string(),
            back: Route::MemberDetail { id },
        }
        match &*member.read() {
            Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! { ErrorPage { status: err.status, message: err.message.clone() } },
            Cache::Fetched(member) => rsx! {
                MemberForm { member_id: Some(id), initial: form_from_member(member) }
            },
        }
    }
}

/// Create or edit form. Invalid fields are reported before any request is sent.
#[component]
fn MemberForm(member_id: Option<i32>, initial: MemberFormDto) -> Element {
    let nav = navigator();
    let mut form = use_signal(|| initial.clone());
    let mut errors = use_signal(ValidationErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

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
            let result = match member_id {
                Some(id) => update_member(id, &payload).await,
                None => create_member(&payload).await,
            };
            match result {
                Ok(saved) => {
                    nav.push(Route::MemberDetail { id: saved.id });
                }
                Err(err) => {
                    tracing::error!("Failed to save member: {}", err);
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
            class: "card bg-base-100 shadow-sm",
            onsubmit: on_submit,
            div {
                class: "card-body",
                if let Some(message) = submit_error() {
                    div { class: "alert alert-error mb-2", "{message}" }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-x-6",
                    FormField {
                        label: "Nama Penuh",
                        required: true,
                        error: field_error("full_name"),
                        input {
                            class: "input w-full",
                            value: "{current.full_name}",
                            oninput: move |evt| form.write().full_name = evt.value(),
                        }
                    }
                    FormField {
                        label: "No. Kad Pengenalan",
                        required: true,
                        error: field_error("ic_number"),
                        input {
                            class: "input w-full",
                            placeholder: "123456-12-1234",
                            value: "{current.ic_number}",
                            oninput: move |evt| form.write().ic_number = evt.value(),
                        }
                    }
                    FormField {
                        label: "No. Telefon",
                        required: true,
                        error: field_error("phone_number"),
                        input {
                            r#type: "tel",
                            class: "input w-full",
                            placeholder: "012-3456789",
                            value: "{current.phone_number}",
                            oninput: move |evt| form.write().phone_number = evt.value(),
                        }
                    }
                    FormField {
                        label: "Email",
                        error: field_error("email"),
                        input {
                            r#type: "email",
                            class: "input w-full",
                            value: "{current.email.clone().unwrap_or_default()}",
                            oninput: move |evt| {
                                let value = evt.value();
                                form.write().email = (!value.trim().is_empty()).then_some(value);
                            },
                        }
                    }
                    FormField {
                        label: "Alamat",
                        required: true,
                        error: field_error("address"),
                        input {
                            class: "input w-full",
                            value: "{current.address}",
                            oninput: move |evt| form.write().address = evt.value(),
                        }
                    }
                    FormField {
                        label: "Poskod",
                        required: true,
                        error: field_error("postcode"),
                        input {
                            class: "input w-full",
                            inputmode: "numeric",
                            value: "{current.postcode}",
                            oninput: move |evt| form.write().postcode = evt.value(),
                        }
                    }
                    FormField {
                        label: "Bandar",
                        required: true,
                        error: field_error("city"),
                        input {
                            class: "input w-full",
                            value: "{current.city}",
                            oninput: move |evt| form.write().city = evt.value(),
                        }
                    }
                    FormField {
                        label: "Negeri",
                        required: true,
                        error: field_error("state"),
                        select {
                            class: "select w-full",
                            value: "{current.state}",
                            onchange: move |evt| form.write().state = evt.value(),
                            option { value: "", "Pilih negeri" }
                            for state in MALAYSIAN_STATES {
                                option { value: state, selected: current.state == state, "{state}" }
                            }
                        }
                    }
                    FormField {
                        label: "Tarikh Lahir",
                        input {
                            r#type: "date",
                            class: "input w-full",
                            value: current.date_of_birth.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
                            oninput: move |evt| {
                                form.write().date_of_birth = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d").ok();
                            },
                        }
                    }
                    FormField {
                        label: "Jantina",
                        required: true,
                        select {
                            class: "select w-full",
                            onchange: move |evt| {
                                if let Ok(gender) = evt.value().parse::<Gender>() {
                                    form.write().gender = gender;
                                }
                            },
                            for gender in Gender::ALL {
                                option { value: gender.as_str(), selected: current.gender == *gender, "{gender.label()}" }
                            }
                        }
                    }
                    FormField {
                        label: "Status",
                        required: true,
                        select {
                            class: "select w-full",
                            onchange: move |evt| {
                                if let Ok(status) = evt.value().parse::<MemberStatus>() {
                                    form.write().status = status;
                                }
                            },
                            for status in MemberStatus::ALL {
                                option { value: status.as_str(), selected: current.status == *status, "{status.label()}" }
                            }
                        }
                    }
                }
                FormField {
                    label: "Catatan",
                    textarea {
                        class: "textarea w-full",
                        rows: "3",
                        value: "{current.notes}",
                        oninput: move |evt| form.write().notes = evt.value(),
                    }
                }
                div {
                    class: "card-actions justify-end mt-4",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| {
                            nav.go_back();
                        },
                        "Batal"
                    }
                    SubmitButton { is_submitting: is_submitting(), label: "Simpan", submitting_label: "Menyimpan..." }
                }
            }
        }
    }
}
