use chrono::NaiveDate;
use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{FormField, SubmitButton},
        constant::SITE_NAME,
        model::clock::local_today,
        route::admin::PageHeader,
        router::Route,
    },
    model::{
        donation::{CreateDonationDto, DonationCategory, PaymentMethod},
        member::MemberDto,
    },
    util::{
        format::{format_ic_number, parse_ringgit},
        validate::ValidationErrors,
    },
};

#[cfg(feature = "web")]
use crate::client::api::{donation::create_donation, member::lookup_members};

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[component]
pub fn NewDonation() -> Element {
    let nav = navigator();

    let mut amount = use_signal(String::new);
    let mut donor_name = use_signal(String::new);
    let mut donor = use_signal(|| None::<MemberDto>);
    let mut category = use_signal(|| DonationCategory::Derma);
    let mut payment_method = use_signal(|| PaymentMethod::Cash);
    let mut date = use_signal(local_today);
    let mut reference_number = use_signal(String::new);
    let mut notes = use_signal(String::new);

    let mut errors = use_signal(ValidationErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if is_submitting() {
            return;
        }

        // Unparseable input is sent as zero so the form reports it like any invalid amount
        let payload = CreateDonationDto {
            donor_name: optional(&donor_name()),
            member_id: donor.read().as_ref().map(|m| m.id),
            amount: parse_ringgit(&amount()).unwrap_or(0),
            category: category(),
            payment_method: payment_method(),
            date: date(),
            reference_number: optional(&reference_number()),
            notes: optional(&notes()),
        };
        if let Err(invalid) = payload.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(ValidationErrors::new());
        submit_error.set(None);
        is_submitting.set(true);

        #[cfg(feature = "web")]
        match create_donation(&payload).await {
            Ok(_) => {
                nav.push(Route::Donations {});
            }
            Err(err) => {
                tracing::error!("Failed to record donation: {}", err);
                errors.set(err.field_errors());
                submit_error.set(Some(err.message));
            }
        }

        is_submitting.set(false);
    };

    let amount_error = errors.read().get("amount").map(str::to_string);

    rsx! {
        Title { "Rekod Derma | {SITE_NAME}" }
        PageHeader {
            title: "Rekod Derma Baharu".to_string(),
            back: Route::Donations {},
        }
        form {
            class: "card bg-base-100 shadow-sm max-w-3xl",
            onsubmit: on_submit,
            div {
                class: "card-body",
                if let Some(message) = submit_error() {
                    div { class: "alert alert-error mb-2", "{message}" }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-x-6",
                    FormField {
                        label: "Jumlah (RM)",
                        required: true,
                        error: amount_error,
                        input {
                            class: "input w-full",
                            inputmode: "decimal",
                            placeholder: "0.00",
                            value: "{amount}",
                            oninput: move |evt| amount.set(evt.value()),
                        }
                    }
                    FormField {
                        label: "Tarikh",
                        required: true,
                        input {
                            r#type: "date",
                            class: "input w-full",
                            value: date().format("%Y-%m-%d").to_string(),
                            oninput: move |evt| {
                                if let Ok(parsed) = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d") {
                                    date.set(parsed);
                                }
                            },
                        }
                    }
                    FormField {
                        label: "Kategori",
                        required: true,
                        select {
                            class: "select w-full",
                            onchange: move |evt| {
                                if let Ok(value) = evt.value().parse() {
                                    category.set(value);
                                }
                            },
                            for option_value in DonationCategory::ALL {
                                option {
                                    value: option_value.as_str(),
                                    selected: category() == *option_value,
                                    "{option_value.label()}"
                                }
                            }
                        }
                    }
                    FormField {
                        label: "Kaedah Bayaran",
                        required: true,
                        select {
                            class: "select w-full",
                            onchange: move |evt| {
                                if let Ok(value) = evt.value().parse() {
                                    payment_method.set(value);
                                }
                            },
                            for option_value in PaymentMethod::ALL {
                                option {
                                    value: option_value.as_str(),
                                    selected: payment_method() == *option_value,
                                    "{option_value.label()}"
                                }
                            }
                        }
                    }
                    FormField {
                        label: "Nama Penderma",
                        input {
                            class: "input w-full",
                            placeholder: "Kosongkan untuk Tanpa Nama",
                            value: "{donor_name}",
                            oninput: move |evt| donor_name.set(evt.value()),
                        }
                    }
                    FormField {
                        label: "Ahli Kariah",
                        error: errors.read().get("member_id").map(str::to_string),
                        MemberPicker {
                            selected: donor,
                            on_select: move |member: MemberDto| {
                                if donor_name().trim().is_empty() {
                                    donor_name.set(member.full_name.clone());
                                }
                                donor.set(Some(member));
                            },
                        }
                    }
                    FormField {
                        label: "No. Rujukan",
                        input {
                            class: "input w-full",
                            value: "{reference_number}",
                            oninput: move |evt| reference_number.set(evt.value()),
                        }
                    }
                }
                FormField {
                    label: "Catatan",
                    textarea {
                        class: "textarea w-full",
                        rows: "3",
                        value: "{notes}",
                        oninput: move |evt| notes.set(evt.value()),
                    }
                }
                div {
                    class: "card-actions justify-end mt-4",
                    Link { to: Route::Donations {}, class: "btn", "Batal" }
                    SubmitButton { is_submitting: is_submitting(), label: "Simpan", submitting_label: "Menyimpan..." }
                }
            }
        }
    }
}

/// Name search over members for linking a donation to its donor.
#[component]
fn MemberPicker(
    mut selected: Signal<Option<MemberDto>>,
    on_select: EventHandler<MemberDto>,
) -> Element {
    let mut term = use_signal(String::new);
    #[allow(unused_mut)]
    let mut matches = use_signal(Vec::<MemberDto>::new);

    #[cfg(feature = "web")]
    let lookup = use_resource(move || async move {
        let term = term();
        if term.trim().is_empty() {
            return Ok(Vec::new());
        }
        lookup_members(term).await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*lookup.read_unchecked() {
        Some(Ok(found)) => matches.set(found.clone()),
        Some(Err(err)) => {
            tracing::error!("Failed to look up members: {}", err);
            matches.set(Vec::new());
        }
        None => (),
    });

    if let Some(member) = selected() {
        return rsx! {
            div {
                class: "flex items-center justify-between gap-2 input w-full",
                span { "{member.full_name} ({format_ic_number(&member.ic_number)})" }
                button {
                    r#type: "button",
                    class: "btn btn-ghost btn-xs",
                    onclick: move |_| {
                        selected.set(None);
                        term.set(String::new());
                    },
                    "Tukar"
                }
            }
        };
    }

    rsx! {
        div {
            class: "relative w-full",
            input {
                r#type: "search",
                class: "input w-full",
                placeholder: "Cari nama ahli (pilihan)",
                value: "{term}",
                oninput: move |evt| term.set(evt.value()),
            }
            if !term().trim().is_empty() && !matches.read().is_empty() {
                ul {
                    class: "menu bg-base-100 rounded-box shadow-lg absolute z-10 w-full mt-1 max-h-60 overflow-y-auto flex-nowrap",
                    for member in matches() {
                        li {
                            key: "{member.id}",
                            button {
                                r#type: "button",
                                onclick: {
                                    let member = member.clone();
                                    move |_| on_select.call(member.clone())
                                },
                                span { "{member.full_name}" }
                                span { class: "text-xs opacity-60", "{format_ic_number(&member.ic_number)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
