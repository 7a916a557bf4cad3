use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, AdminLayout},
    model::auth::AuthContext,
    router::Route,
};

/// Admin area gate. Anyone without a valid admin session is sent to the login page.
#[component]
pub fn ProtectedLayout() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let state = auth_context.read().clone();
    let resolved = state.is_resolved();
    let authenticated = state.is_authenticated();

    use_effect(use_reactive!(|(resolved, authenticated)| {
        if resolved && !authenticated {
            nav.replace(Route::AdminLogin {});
        }
    }));

    rsx! {
        if authenticated {
            AdminLayout {}
        } else {
            // Rendered while the session check runs or the redirect happens
            LoadingPage {}
        }
    }
}
