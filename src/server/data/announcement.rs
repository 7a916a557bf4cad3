//! Announcement repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Condition, Order},
    ActiveValue, ColumnTrait, DatabaseConnection,
};

use crate::{
    model::announcement::PUBLIC_PAGE_SIZE,
    server::{
        data::document::{Cursor, DocumentStore, ListQuery, Page},
        error::{storage::StorageError, AppError},
        model::announcement::{Announcement, AnnouncementAuthor, AnnouncementParam},
    },
};

type AnnouncementEntity = entity::prelude::Announcement;

fn published() -> Condition {
    Condition::all().add(entity::announcement::Column::Published.eq(true))
}

/// Repository providing database operations for announcements.
pub struct AnnouncementRepository<'a> {
    store: DocumentStore<'a>,
}

impl<'a> AnnouncementRepository<'a> {
    /// Creates a new AnnouncementRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            store: DocumentStore::new(db),
        }
    }

    /// Inserts an announcement attributed to `author`.
    ///
    /// Both timestamps are stamped with the current time unless `created_at` is given.
    ///
    /// # Returns
    /// - `Ok(Announcement)` - Created announcement with its id
    /// - `Err(AppError)` - Insert failed
    pub async fn add(
        &self,
        param: AnnouncementParam,
        author: AnnouncementAuthor,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Announcement, AppError> {
        let mut active = entity::announcement::ActiveModel {
            author: ActiveValue::Set(author.display_name),
            author_id: ActiveValue::Set(author.uid),
            ..active_model(param)
        };
        if let Some(created_at) = created_at {
            active.created_at = ActiveValue::Set(created_at);
            active.updated_at = ActiveValue::Set(created_at);
        }

        let entity = self.store.add::<AnnouncementEntity, _>(active).await?;

        Announcement::from_entity(entity)
    }

    /// Replaces the editable fields and stamps `updated_at`; authorship and
    /// `created_at` are kept.
    ///
    /// # Returns
    /// - `Ok(Some(Announcement))` - Updated announcement
    /// - `Ok(None)` - No announcement with that id
    /// - `Err(AppError)` - Update failed
    pub async fn update(
        &self,
        id: i32,
        param: AnnouncementParam,
    ) -> Result<Option<Announcement>, AppError> {
        let mut active = active_model(param);
        active.id = ActiveValue::Unchanged(id);

        self.store
            .update::<AnnouncementEntity, _>(active)
            .await?
            .map(Announcement::from_entity)
            .transpose()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Announcement>, AppError> {
        self.store
            .get_by_id::<AnnouncementEntity, _>(id)
            .await?
            .map(Announcement::from_entity)
            .transpose()
    }

    /// Returns every announcement, drafts included, newest first.
    pub async fn get_all(&self) -> Result<Vec<Announcement>, AppError> {
        self.store
            .list::<AnnouncementEntity>(
                ListQuery::new().order_by(entity::announcement::Column::CreatedAt, Order::Desc),
            )
            .await?
            .into_iter()
            .map(Announcement::from_entity)
            .collect()
    }

    /// Returns the newest `limit` published announcements.
    pub async fn get_latest_published(&self, limit: u64) -> Result<Vec<Announcement>, AppError> {
        self.store
            .list::<AnnouncementEntity>(
                ListQuery::new()
                    .filter(published())
                    .order_by(entity::announcement::Column::CreatedAt, Order::Desc)
                    .order_by(entity::announcement::Column::Id, Order::Desc)
                    .limit(limit),
            )
            .await?
            .into_iter()
            .map(Announcement::from_entity)
            .collect()
    }

    /// Returns one public page of published announcements, newest first, starting
    /// after `cursor`.
    ///
    /// # Returns
    /// - `Ok(Page<Announcement>)` - Up to `PUBLIC_PAGE_SIZE` announcements and a
    ///   continuation cursor when more exist
    /// - `Err(AppError)` - Query failed
    pub async fn get_published_page(
        &self,
        cursor: Option<Cursor>,
    ) -> Result<Page<Announcement>, AppError> {
        let page = self
            .store
            .paginate::<AnnouncementEntity>(PUBLIC_PAGE_SIZE, cursor, published())
            .await?;

        let items = page
            .items
            .into_iter()
            .map(Announcement::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        })
    }

    pub async fn count_published(&self) -> Result<u64, StorageError> {
        self.store.count::<AnnouncementEntity>(published()).await
    }

    /// Whether an announcement with this title and creation time exists. Used to
    /// skip rows a previous import already wrote.
    pub async fn exists_matching(
        &self,
        title: &str,
        created_at: DateTime<Utc>,
    ) -> Result<bool, StorageError> {
        let count = self
            .store
            .count::<AnnouncementEntity>(
                Condition::all()
                    .add(entity::announcement::Column::Title.eq(title))
                    .add(entity::announcement::Column::CreatedAt.eq(created_at)),
            )
            .await?;

        Ok(count > 0)
    }

    /// Deletes an announcement.
    ///
    /// # Returns
    /// - `Ok(true)` - Announcement deleted
    /// - `Ok(false)` - No announcement with that id
    /// - `Err(StorageError)` - Delete failed
    pub async fn delete(&self, id: i32) -> Result<bool, StorageError> {
        self.store.delete::<AnnouncementEntity, _>(id).await
    }
}

fn active_model(param: AnnouncementParam) -> entity::announcement::ActiveModel {
    entity::announcement::ActiveModel {
        title: ActiveValue::Set(param.title),
        content: ActiveValue::Set(param.content),
        category: ActiveValue::Set(param.category.as_str().to_string()),
        priority: ActiveValue::Set(param.priority.as_str().to_string()),
        published: ActiveValue::Set(param.published),
        ..Default::default()
    }
}
