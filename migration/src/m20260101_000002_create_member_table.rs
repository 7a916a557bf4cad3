use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string(Member::FullName))
                    .col(string(Member::IcNumber))
                    .col(string(Member::PhoneNumber))
                    .col(string_null(Member::Email))
                    .col(text(Member::Address))
                    .col(string(Member::Postcode))
                    .col(string(Member::City))
                    .col(string(Member::State))
                    .col(date_null(Member::DateOfBirth))
                    .col(string(Member::Gender))
                    .col(string(Member::Status).default("active"))
                    .col(text(Member::Notes).default(""))
                    .col(timestamp_with_time_zone(Member::CreatedAt))
                    .col(timestamp_with_time_zone(Member::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_member_created_at")
                    .table(Member::Table)
                    .col(Member::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    FullName,
    IcNumber,
    PhoneNumber,
    Email,
    Address,
    Postcode,
    City,
    State,
    DateOfBirth,
    Gender,
    Status,
    Notes,
    CreatedAt,
    UpdatedAt,
}
