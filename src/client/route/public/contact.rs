use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{
        fa_brands_icons::{FaFacebook, FaInstagram},
        fa_solid_icons::{FaClock, FaEnvelope, FaLocationDot, FaPhone},
    },
    Icon,
};

use crate::client::{
    component::Page,
    constant::{
        CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_HREF, FACEBOOK_URL, FAQ,
        INSTAGRAM_URL, OFFICE_HOURS, SITE_NAME,
    },
};

#[component]
pub fn Contact() -> Element {
    rsx! {
        Title { "Hubungi Kami | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-6xl flex flex-col gap-8",
                div {
                    class: "text-center",
                    h1 { class: "text-3xl md:text-4xl font-bold", "Hubungi Kami" }
                    p { class: "opacity-70 mt-2", "Kami sedia membantu anda" }
                }
                div {
                    class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                    div {
                        class: "flex flex-col gap-4",
                        div {
                            class: "card bg-base-100 shadow-md",
                            div {
                                class: "card-body flex-row gap-4",
                                Icon { width: 24, height: 24, icon: FaLocationDot }
                                div {
                                    h2 { class: "font-semibold mb-1", "Alamat" }
                                    for line in CONTACT_ADDRESS {
                                        p { class: "opacity-80", "{line}" }
                                    }
                                }
                            }
                        }
                        div {
                            class: "card bg-base-100 shadow-md",
                            div {
                                class: "card-body flex-row gap-4",
                                Icon { width: 24, height: 24, icon: FaPhone }
                                div {
                                    h2 { class: "font-semibold mb-1", "Telefon" }
                                    a { href: CONTACT_PHONE_HREF, class: "link link-hover", "{CONTACT_PHONE}" }
                                }
                            }
                        }
                        div {
                            class: "card bg-base-100 shadow-md",
                            div {
                                class: "card-body flex-row gap-4",
                                Icon { width: 24, height: 24, icon: FaEnvelope }
                                div {
                                    h2 { class: "font-semibold mb-1", "E-mel" }
                                    a { href: "mailto:{CONTACT_EMAIL}", class: "link link-hover", "{CONTACT_EMAIL}" }
                                }
                            }
                        }
                    }
                    div {
                        class: "flex flex-col gap-4",
                        div {
                            class: "card bg-base-100 shadow-md",
                            div {
                                class: "card-body",
                                div {
                                    class: "flex items-center gap-3 mb-2",
                                    Icon { width: 22, height: 22, icon: FaClock }
                                    h2 { class: "font-semibold", "Waktu Operasi Pejabat" }
                                }
                                for (days, hours) in OFFICE_HOURS {
                                    div {
                                        class: "flex justify-between",
                                        span { "{days}" }
                                        span { class: "font-semibold", "{hours}" }
                                    }
                                }
                                p { class: "text-sm opacity-60 mt-2", "*Masjid dibuka untuk solat sepanjang masa" }
                            }
                        }
                        div {
                            class: "card bg-base-100 shadow-md",
                            div {
                                class: "card-body",
                                h2 { class: "font-semibold mb-2", "Ikuti Kami" }
                                div {
                                    class: "flex gap-3",
                                    a {
                                        href: FACEBOOK_URL,
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "btn btn-circle btn-info",
                                        Icon { width: 20, height: 20, icon: FaFacebook }
                                    }
                                    a {
                                        href: INSTAGRAM_URL,
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "btn btn-circle btn-secondary",
                                        Icon { width: 20, height: 20, icon: FaInstagram }
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "card bg-base-100 shadow-md mb-10",
                    div {
                        class: "card-body",
                        h2 { class: "text-2xl font-bold mb-2", "Soalan Lazim" }
                        for (question, answer) in FAQ {
                            div {
                                class: "mb-3",
                                h3 { class: "font-semibold", "{question}" }
                                p { class: "opacity-80", "{answer}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
