use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{
        FaBars, FaBullhorn, FaGaugeHigh, FaHandHoldingDollar, FaMosque, FaRightFromBracket,
        FaUsers,
    },
    Icon,
};

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Dashboard,
    Members,
    Donations,
    Announcements,
}

impl Section {
    fn of(route: &Route) -> Option<Self> {
        match route {
            Route::Dashboard {} => Some(Section::Dashboard),
            Route::Members {}
            | Route::NewMember {}
            | Route::MemberDetail { .. }
            | Route::EditMember { .. } => Some(Section::Members),
            Route::Donations {} | Route::NewDonation {} => Some(Section::Donations),
            Route::AdminAnnouncements {}
            | Route::NewAnnouncement {}
            | Route::EditAnnouncement { .. } => Some(Section::Announcements),
            _ => None,
        }
    }
}

/// Sidebar shell around every signed-in admin page.
#[component]
pub fn AdminLayout() -> Element {
    let mut auth_context = use_context::<AuthContext>();
    let nav = navigator();
    let current = Section::of(&use_route::<Route>());

    let display_name = auth_context
        .read()
        .admin()
        .map(|admin| (admin.display_name.clone(), admin.role.label()));

    let links = [
        (Route::Dashboard {}, "Papan Pemuka", Section::Dashboard),
        (Route::Members {}, "Ahli Kariah", Section::Members),
        (Route::Donations {}, "Derma", Section::Donations),
        (Route::AdminAnnouncements {}, "Pengumuman", Section::Announcements),
    ];

    rsx!(
        div {
            class: "drawer lg:drawer-open",
            input { id: "admin-drawer", r#type: "checkbox", class: "drawer-toggle" }
            div {
                class: "drawer-content flex flex-col min-h-screen bg-base-200",
                div {
                    class: "navbar bg-base-100 lg:hidden",
                    label {
                        r#for: "admin-drawer",
                        class: "btn btn-ghost btn-square",
                        Icon { width: 20, height: 20, icon: FaBars }
                    }
                    span { class: "font-semibold", "{SITE_NAME}" }
                }
                main {
                    class: "flex-1 p-4 lg:p-8",
                    Outlet::<Route> {}
                }
            }
            div {
                class: "drawer-side z-30",
                label { r#for: "admin-drawer", class: "drawer-overlay" }
                aside {
                    class: "flex flex-col w-64 min-h-full bg-neutral text-neutral-content",
                    Link {
                        to: Route::Home {},
                        class: "flex items-center gap-2 p-5 font-bold text-lg",
                        Icon { width: 26, height: 26, icon: FaMosque }
                        "{SITE_NAME}"
                    }
                    ul {
                        class: "menu flex-1 w-full gap-1",
                        for (route, label, section) in links {
                            li {
                                Link {
                                    to: route,
                                    class: if current == Some(section) { "menu-active" } else { "" },
                                    match section {
                                        Section::Dashboard => rsx!(Icon { width: 16, height: 16, icon: FaGaugeHigh }),
                                        Section::Members => rsx!(Icon { width: 16, height: 16, icon: FaUsers }),
                                        Section::Donations => rsx!(Icon { width: 16, height: 16, icon: FaHandHoldingDollar }),
                                        Section::Announcements => rsx!(Icon { width: 16, height: 16, icon: FaBullhorn }),
                                    }
                                    "{label}"
                                }
                            }
                        }
                    }
                    div {
                        class: "p-4 border-t border-neutral-content/20",
                        if let Some((name, role)) = display_name {
                            p { class: "font-semibold", "{name}" }
                            p { class: "text-xs opacity-60 mb-3", "{role}" }
                        }
                        button {
                            class: "btn btn-outline btn-sm w-full gap-2",
                            onclick: move |_| async move {
                                #[cfg(feature = "web")]
                                auth_context.logout().await;
                                nav.replace(Route::AdminLogin {});
                            },
                            Icon { width: 14, height: 14, icon: FaRightFromBracket }
                            "Log Keluar"
                        }
                    }
                }
            }
        }
    )
}
