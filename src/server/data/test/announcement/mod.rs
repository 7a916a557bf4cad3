use crate::{
    model::announcement::{AnnouncementCategory, Priority},
    server::{
        data::announcement::AnnouncementRepository,
        error::AppError,
        model::announcement::{AnnouncementAuthor, AnnouncementParam},
    },
};
use entity::prelude::Announcement;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod get_latest_published;
mod get_published_page;
mod update;

fn announcement_param(title: &str, published: bool) -> AnnouncementParam {
    AnnouncementParam {
        title: title.to_string(),
        content: "**Semua** dijemput hadir.".to_string(),
        category: AnnouncementCategory::Event,
        priority: Priority::High,
        published,
    }
}

fn author() -> AnnouncementAuthor {
    AnnouncementAuthor {
        uid: "uid-imam".to_string(),
        display_name: "Imam Besar".to_string(),
    }
}
