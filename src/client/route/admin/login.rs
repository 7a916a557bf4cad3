use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaMosque, Icon};
use std::rc::Rc;

use crate::client::{
    component::{FormField, LoadingPage, SubmitButton},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn AdminLogin() -> Element {
    let mut auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    // Leave for the dashboard as soon as a session exists; dropped with the page
    use_hook(move || {
        Rc::new(auth_context.on_auth_change(move |state| {
            if state.is_authenticated() {
                nav.replace(Route::Dashboard {});
            }
        }))
    });

    // Already signed in when arriving here
    use_effect(move || {
        if auth_context.read().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let on_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if is_submitting() {
            return;
        }

        let email_value = email().trim().to_string();
        if email_value.is_empty() || password().is_empty() {
            error.set(Some("Sila masukkan email dan kata laluan".to_string()));
            return;
        }

        is_submitting.set(true);
        error.set(None);

        #[cfg(feature = "web")]
        match crate::client::api::auth::login(email_value, password()).await {
            Ok(admin) => {
                password.set(String::new());
                auth_context.set(AuthState::Authenticated(admin));
            }
            Err(err) => {
                dioxus_logger::tracing::error!("Sign-in failed: {}", err);
                error.set(Some(err.message));
            }
        }

        is_submitting.set(false);
    };

    let state = auth_context.read().clone();

    rsx! {
        Title { "Log Masuk | {SITE_NAME}" }
        if !state.is_resolved() || state.is_authenticated() {
            LoadingPage {}
        } else {
            div {
                class: "min-h-screen flex items-center justify-center bg-base-200 p-4",
                div {
                    class: "card w-full max-w-md bg-base-100 shadow-xl",
                    form {
                        class: "card-body gap-4",
                        onsubmit: on_submit,
                        div {
                            class: "flex flex-col items-center gap-2 mb-2",
                            Icon { width: 48, height: 48, icon: FaMosque }
                            h1 { class: "text-2xl font-bold", "{SITE_NAME}" }
                            p { class: "opacity-60", "Log masuk pentadbir" }
                        }
                        if let Some(message) = error() {
                            div { class: "alert alert-error", "{message}" }
                        }
                        FormField {
                            label: "Email",
                            required: true,
                            input {
                                r#type: "email",
                                class: "input w-full",
                                autocomplete: "username",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                        FormField {
                            label: "Kata Laluan",
                            required: true,
                            input {
                                r#type: "password",
                                class: "input w-full",
                                autocomplete: "current-password",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                        }
                        SubmitButton { is_submitting: is_submitting(), label: "Log Masuk", submitting_label: "Sedang log masuk..." }
                        Link { to: Route::Home {}, class: "link link-hover text-sm text-center", "Kembali ke laman utama" }
                    }
                }
            }
        }
    }
}
