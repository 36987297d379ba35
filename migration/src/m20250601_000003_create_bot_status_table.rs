use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BotStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(BotStatus::Id))
                    .col(string(BotStatus::Status))
                    .col(string_null(BotStatus::StatusMessage))
                    .col(string_null(BotStatus::Announcement))
                    .col(string_null(BotStatus::UpdatedBy))
                    .col(timestamp_with_time_zone(BotStatus::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bot_status_updated_at")
                    .table(BotStatus::Table)
                    .col(BotStatus::UpdatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BotStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BotStatus {
    Table,
    Id,
    Status,
    StatusMessage,
    Announcement,
    UpdatedBy,
    UpdatedAt,
}
