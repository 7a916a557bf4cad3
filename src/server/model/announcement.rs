//! Announcement domain model and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::announcement::{
        AnnouncementCategory, AnnouncementDto, AnnouncementFormDto, AnnouncementPageDto, Priority,
    },
    server::{data::document::Page, error::AppError, model::parse_stored},
};

/// Announcement with its publication state.
///
/// Only published announcements appear on the public site.
#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: i32,
    pub title: String,
    /// Markdown body.
    pub content: String,
    pub category: AnnouncementCategory,
    pub priority: Priority,
    pub published: bool,
    /// Display name of the author.
    pub author: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    /// Converts the announcement domain model to a DTO for API responses.
    pub fn into_dto(self) -> AnnouncementDto {
        AnnouncementDto {
            id: self.id,
            title: self.title,
            content: self.content,
            category: self.category,
            priority: self.priority,
            published: self.published,
            author: self.author,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to an announcement domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Announcement)` - Converted announcement
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored category or priority
    ///   is unknown
    pub fn from_entity(entity: entity::announcement::Model) -> Result<Self, AppError> {
        Ok(Self {
            category: parse_stored("announcement", "category", &entity.category)?,
            priority: parse_stored("announcement", "priority", &entity.priority)?,
            id: entity.id,
            title: entity.title,
            content: entity.content,
            published: entity.published,
            author: entity.author,
            author_id: entity.author_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl Page<Announcement> {
    /// Converts a page of announcements to a DTO with an encoded cursor.
    pub fn into_dto(self) -> AnnouncementPageDto {
        AnnouncementPageDto {
            next_cursor: self.next_cursor.map(|c| c.encode()),
            has_more: self.has_more,
            announcements: self.items.into_iter().map(Announcement::into_dto).collect(),
        }
    }
}

/// Editable announcement fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementParam {
    pub title: String,
    pub content: String,
    pub category: AnnouncementCategory,
    pub priority: Priority,
    pub published: bool,
}

impl AnnouncementParam {
    /// Validates the submitted form and converts it to write parameters.
    ///
    /// # Returns
    /// - `Ok(AnnouncementParam)` - Trimmed parameters
    /// - `Err(AppError::ValidationErr)` - Title or content is blank
    pub fn from_dto(dto: AnnouncementFormDto) -> Result<Self, AppError> {
        dto.validate()?;

        Ok(Self {
            title: dto.title.trim().to_string(),
            content: dto.content.trim().to_string(),
            category: dto.category,
            priority: dto.priority,
            published: dto.published,
        })
    }
}

/// Author attribution stamped on a new announcement.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementAuthor {
    pub uid: String,
    pub display_name: String,
}
