use chrono::{DateTime, FixedOffset};
use sea_orm::DatabaseConnection;

use crate::{
    model::announcement::{AnnouncementFormDto, AnnouncementListQuery},
    server::{
        data::{
            announcement::AnnouncementRepository,
            document::{Cursor, Page},
        },
        error::AppError,
        listing::{record::AnnouncementFilter, ListingQuery},
        model::{
            admin_user::AdminUser,
            announcement::{Announcement, AnnouncementAuthor, AnnouncementParam},
        },
    },
};

/// Announcements shown on the public home page.
pub const HOME_PAGE_ANNOUNCEMENTS: u64 = 3;

pub struct AnnouncementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Admin listing over every announcement, drafts included.
    pub async fn list(
        &self,
        query: AnnouncementListQuery,
        now: DateTime<FixedOffset>,
    ) -> Result<Vec<Announcement>, AppError> {
        let announcements = AnnouncementRepository::new(self.db).get_all().await?;

        Ok(ListingQuery::<AnnouncementFilter>::from(query).apply(announcements, now))
    }

    /// One page of published announcements, newest first.
    ///
    /// # Arguments
    /// - `cursor` - Continuation cursor from the previous page, `None` for the first
    ///
    /// # Returns
    /// - `Ok(Page<Announcement>)` - Up to 20 announcements and the next cursor
    /// - `Err(AppError::BadRequest)` - Cursor is malformed
    pub async fn published_page(
        &self,
        cursor: Option<&str>,
    ) -> Result<Page<Announcement>, AppError> {
        let cursor = cursor
            .filter(|c| !c.is_empty())
            .map(|c| {
                Cursor::decode(c).ok_or_else(|| AppError::BadRequest("Kursor tidak sah".to_string()))
            })
            .transpose()?;

        AnnouncementRepository::new(self.db)
            .get_published_page(cursor)
            .await
    }

    pub async fn latest_published(&self) -> Result<Vec<Announcement>, AppError> {
        AnnouncementRepository::new(self.db)
            .get_latest_published(HOME_PAGE_ANNOUNCEMENTS)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Announcement, AppError> {
        AnnouncementRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates an announcement authored by the signed-in admin.
    pub async fn create(
        &self,
        dto: AnnouncementFormDto,
        author: &AdminUser,
    ) -> Result<Announcement, AppError> {
        let param = AnnouncementParam::from_dto(dto)?;
        let author = AnnouncementAuthor {
            uid: author.uid.clone(),
            display_name: author.display_name.clone(),
        };

        AnnouncementRepository::new(self.db)
            .add(param, author, None)
            .await
    }

    pub async fn update(&self, id: i32, dto: AnnouncementFormDto) -> Result<Announcement, AppError> {
        let param = AnnouncementParam::from_dto(dto)?;

        AnnouncementRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AnnouncementRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Pengumuman tidak dijumpai".to_string())
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    /// Expected: Err(AppError::BadRequest) for a cursor that does not decode
    #[tokio::test]
    async fn rejects_malformed_cursor() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Announcement)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = AnnouncementService::new(db)
            .published_page(Some("bukan-kursor"))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Expected: empty cursor string is treated as the first page
    #[tokio::test]
    async fn empty_cursor_starts_from_first_page() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Announcement)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        factory::announcement::create_announcement(db).await?;

        let page = AnnouncementService::new(db).published_page(Some("")).await?;

        assert_eq!(page.items.len(), 1);
        assert!(!page.has_more);

        Ok(())
    }
}
