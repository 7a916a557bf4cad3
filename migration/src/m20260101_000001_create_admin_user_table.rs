use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminUser::Table)
                    .if_not_exists()
                    .col(string(AdminUser::Uid).primary_key())
                    .col(string(AdminUser::Email))
                    .col(string(AdminUser::DisplayName))
                    .col(string(AdminUser::Role).default("admin"))
                    .col(boolean(AdminUser::Active).default(true))
                    .col(timestamp_with_time_zone_null(AdminUser::LastLogin))
                    .col(
                        timestamp_with_time_zone(AdminUser::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(AdminUser::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdminUser {
    Table,
    Uid,
    Email,
    DisplayName,
    Role,
    Active,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}
