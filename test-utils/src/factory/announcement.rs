//! Announcement factory for creating test announcement rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for announcements.
///
/// # Example
///
/// ```rust,ignore
/// let draft = AnnouncementFactory::new(&db)
///     .title("Kelas Mengaji")
///     .published(false)
///     .build()
///     .await?;
/// ```
pub struct AnnouncementFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    content: String,
    category: String,
    priority: String,
    published: bool,
    created_at: DateTime<Utc>,
}

impl<'a> AnnouncementFactory<'a> {
    /// Creates a new AnnouncementFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Pengumuman {id}"`, content: `"Kandungan {id}"`
    /// - category: `"general"`, priority: `"medium"`
    /// - published: `true`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Pengumuman {}", id),
            content: format!("Kandungan {}", id),
            category: "general".to_string(),
            priority: "medium".to_string(),
            published: true,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Overrides the creation timestamp, used to control listing order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Inserts the announcement.
    ///
    /// # Returns
    /// - `Ok(entity::announcement::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::announcement::Model, DbErr> {
        entity::announcement::ActiveModel {
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            category: ActiveValue::Set(self.category),
            priority: ActiveValue::Set(self.priority),
            published: ActiveValue::Set(self.published),
            author: ActiveValue::Set("Admin".to_string()),
            author_id: ActiveValue::Set("uid-admin".to_string()),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published `general` announcement with default values.
pub async fn create_announcement(
    db: &DatabaseConnection,
) -> Result<entity::announcement::Model, DbErr> {
    AnnouncementFactory::new(db).build().await
}
