use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donation::Table)
                    .if_not_exists()
                    .col(pk_auto(Donation::Id))
                    .col(string_null(Donation::DonorName))
                    .col(integer_null(Donation::MemberId))
                    .col(big_integer(Donation::AmountSen))
                    .col(string(Donation::Category))
                    .col(string(Donation::PaymentMethod))
                    .col(date(Donation::Date))
                    .col(string_null(Donation::ReferenceNumber))
                    .col(text_null(Donation::Notes))
                    .col(string_null(Donation::CreatedBy))
                    .col(timestamp_with_time_zone(Donation::CreatedAt))
                    .col(timestamp_with_time_zone(Donation::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_donation_date")
                    .table(Donation::Table)
                    .col(Donation::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Donation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Donation {
    Table,
    Id,
    DonorName,
    MemberId,
    AmountSen,
    Category,
    PaymentMethod,
    Date,
    ReferenceNumber,
    Notes,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
