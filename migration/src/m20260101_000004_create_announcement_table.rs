use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Announcement::Table)
                    .if_not_exists()
                    .col(pk_auto(Announcement::Id))
                    .col(string(Announcement::Title))
                    .col(text(Announcement::Content))
                    .col(string(Announcement::Category).default("general"))
                    .col(string(Announcement::Priority).default("medium"))
                    .col(boolean(Announcement::Published).default(false))
                    .col(string(Announcement::Author))
                    .col(string(Announcement::AuthorId))
                    .col(timestamp_with_time_zone(Announcement::CreatedAt))
                    .col(timestamp_with_time_zone(Announcement::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_announcement_published_created_at")
                    .table(Announcement::Table)
                    .col(Announcement::Published)
                    .col(Announcement::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Announcement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Announcement {
    Table,
    Id,
    Title,
    Content,
    Category,
    Priority,
    Published,
    Author,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}
