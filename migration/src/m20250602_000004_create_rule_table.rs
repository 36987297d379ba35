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
                    .table(Rule::Table)
                    .if_not_exists()
                    .col(pk_auto(Rule::Id))
                    .col(string(Rule::ServerId))
                    .col(string(Rule::Name))
                    .col(string(Rule::RuleType))
                    .col(text(Rule::Description))
                    .col(string_null(Rule::Permission))
                    .col(string_null(Rule::Trigger))
                    .col(integer(Rule::UsageCount).default(0))
                    .col(integer(Rule::TriggerCount).default(0))
                    .col(boolean(Rule::IsActive).default(true))
                    .col(string_null(Rule::CreatedBy))
                    .col(timestamp_with_time_zone(Rule::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rule_server_id")
                            .from(Rule::Table, Rule::ServerId)
                            .to(DiscordServer::Table, DiscordServer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rule_server_id")
                    .table(Rule::Table)
                    .col(Rule::ServerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rule {
    Table,
    Id,
    ServerId,
    Name,
    RuleType,
    Description,
    Permission,
    Trigger,
    UsageCount,
    TriggerCount,
    IsActive,
    CreatedBy,
    CreatedAt,
}
