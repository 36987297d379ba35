//! Repository for servers known to the dashboard.
//!
//! Rows are written from two places: the bot's `guild_create` events and the set of
//! authorized servers resolved at each login. Both go through `upsert`.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::server::{DiscordServer, UpsertServerParam};

pub struct DiscordServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a server or refreshes its name, member count, icon and active flag.
    pub async fn upsert(&self, param: UpsertServerParam) -> Result<DiscordServer, DbErr> {
        let entity = entity::prelude::DiscordServer::insert(entity::discord_server::ActiveModel {
            id: ActiveValue::Set(param.id),
            name: ActiveValue::Set(param.name),
            member_count: ActiveValue::Set(param.member_count),
            icon_url: ActiveValue::Set(param.icon_url),
            is_active: ActiveValue::Set(param.is_active),
            added_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::discord_server::Column::Id)
                .update_columns([
                    entity::discord_server::Column::Name,
                    entity::discord_server::Column::MemberCount,
                    entity::discord_server::Column::IconUrl,
                    entity::discord_server::Column::IsActive,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(DiscordServer::from_entity(entity))
    }

    /// Finds a server by its Discord guild ID.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<DiscordServer>, DbErr> {
        let entity = entity::prelude::DiscordServer::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(DiscordServer::from_entity))
    }

    /// Marks a server inactive after the bot leaves it. History rows are kept.
    ///
    /// # Returns
    /// - `Ok(true)` - Server existed and was deactivated
    /// - `Ok(false)` - No server with this ID
    pub async fn deactivate(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::DiscordServer::update_many()
            .col_expr(entity::discord_server::Column::IsActive, Expr::value(false))
            .filter(entity::discord_server::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
