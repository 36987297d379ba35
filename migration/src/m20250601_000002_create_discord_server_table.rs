use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordServer::Table)
                    .if_not_exists()
                    .col(string(DiscordServer::Id).primary_key())
                    .col(string(DiscordServer::Name))
                    .col(big_integer(DiscordServer::MemberCount).default(0))
                    .col(string_null(DiscordServer::IconUrl))
                    .col(boolean(DiscordServer::IsActive).default(true))
                    .col(timestamp_with_time_zone(DiscordServer::AddedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordServer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordServer {
    Table,
    Id,
    Name,
    MemberCount,
    IconUrl,
    IsActive,
    AddedAt,
}
