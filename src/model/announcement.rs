use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{model::string_enum, util::validate::ValidationErrors};

/// Page size of the public announcement list.
pub const PUBLIC_PAGE_SIZE: u64 = 20;

string_enum! {
    AnnouncementCategory as "announcement category" {
        General => "general", "Umum";
        Event => "event", "Acara";
        Urgent => "urgent", "Penting";
        Reminder => "reminder", "Peringatan";
    }
}

string_enum! {
    Priority as "priority" {
        Low => "low", "Rendah";
        Medium => "medium", "Sederhana";
        High => "high", "Tinggi";
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AnnouncementDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: AnnouncementCategory,
    pub priority: Priority,
    pub published: bool,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AnnouncementFormDto {
    pub title: String,
    pub content: String,
    pub category: AnnouncementCategory,
    pub priority: Priority,
    pub published: bool,
}

impl Default for AnnouncementFormDto {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            category: AnnouncementCategory::General,
            priority: Priority::Medium,
            published: false,
        }
    }
}

impl AnnouncementFormDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("title", &self.title, "Tajuk diperlukan");
        errors.require("content", &self.content, "Kandungan diperlukan");
        errors.into_result()
    }
}

/// One page of the public list with the cursor for the next page.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AnnouncementPageDto {
    pub announcements: Vec<AnnouncementDto>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams), into_params(parameter_in = Query))]
pub struct AnnouncementListQuery {
    /// Matched against title and content.
    pub search: Option<String>,
    pub category: Option<AnnouncementCategory>,
    pub published: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams), into_params(parameter_in = Query))]
pub struct CursorQuery {
    pub cursor: Option<String>,
}
