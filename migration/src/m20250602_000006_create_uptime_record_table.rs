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
                    .table(UptimeRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(UptimeRecord::Id))
                    .col(string(UptimeRecord::ServerId))
                    .col(timestamp_with_time_zone(UptimeRecord::Date))
                    .col(double(UptimeRecord::Uptime))
                    .col(integer(UptimeRecord::Incidents).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_uptime_record_server_id")
                            .from(UptimeRecord::Table, UptimeRecord::ServerId)
                            .to(DiscordServer::Table, DiscordServer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_uptime_record_server_date")
                    .table(UptimeRecord::Table)
                    .col(UptimeRecord::ServerId)
                    .col(UptimeRecord::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UptimeRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UptimeRecord {
    Table,
    Id,
    ServerId,
    Date,
    Uptime,
    Incidents,
}
