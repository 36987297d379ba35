use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_discord_server_table::DiscordServer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Statistics::Table)
                    .if_not_exists()
                    .col(pk_auto(Statistics::Id))
                    .col(string(Statistics::ServerId))
                    .col(timestamp_with_time_zone(Statistics::Date))
                    .col(integer(Statistics::ServerCount).default(0))
                    .col(integer(Statistics::UserCount).default(0))
                    .col(integer(Statistics::CommandsExecuted).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_statistics_server_id")
                            .from(Statistics::Table, Statistics::ServerId)
                            .to(DiscordServer::Table, DiscordServer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_statistics_server_date")
                    .table(Statistics::Table)
                    .col(Statistics::ServerId)
                    .col(Statistics::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Statistics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Statistics {
    Table,
    Id,
    ServerId,
    Date,
    ServerCount,
    UserCount,
    CommandsExecuted,
}
