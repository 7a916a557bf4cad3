use dioxus::prelude::*;

use crate::client::component::{Layout, ProtectedLayout};
use crate::client::route::{
    admin::{
        AdminAnnouncements, AdminLogin, Dashboard, Donations, EditAnnouncement, EditMember,
        MemberDetail, Members, NewAnnouncement, NewDonation, NewMember,
    },
    public::{Announcements, Contact, Home, PrayerTimes},
    NotFound,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/prayer-times")]
        PrayerTimes {},

        #[route("/announcements")]
        Announcements {},

        #[route("/contact")]
        Contact {},
    #[end_layout]

    #[nest("/admin")]
        #[route("/login")]
        AdminLogin {},

        #[redirect("/", || Route::Dashboard {})]

        #[layout(ProtectedLayout)]
            #[route("/dashboard")]
            Dashboard {},

            #[route("/members")]
            Members {},

            #[route("/members/new")]
            NewMember {},

            #[route("/members/:id")]
            MemberDetail { id: i32 },

            #[route("/members/:id/edit")]
            EditMember { id: i32 },

            #[route("/donations")]
            Donations {},

            #[route("/donations/new")]
            NewDonation {},

            #[route("/announcements")]
            AdminAnnouncements {},

            #[route("/announcements/new")]
            NewAnnouncement {},

            #[route("/announcements/:id/edit")]
            EditAnnouncement { id: i32 },
        #[end_layout]
    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
