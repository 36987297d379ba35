use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::bot::{BotStatus, UpdateBotStatusParams};

/// Repository for the append-only bot status history.
pub struct BotStatusRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotStatusRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the most recently written status, if any.
    pub async fn latest(&self) -> Result<Option<BotStatus>, DbErr> {
        let entity = entity::prelude::BotStatus::find()
            .order_by_desc(entity::bot_status::Column::UpdatedAt)
            .order_by_desc(entity::bot_status::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(BotStatus::from_entity))
    }

    /// Appends a new status row, which becomes the current status.
    pub async fn create(&self, params: UpdateBotStatusParams) -> Result<BotStatus, DbErr> {
        let entity = entity::bot_status::ActiveModel {
            status: ActiveValue::Set(params.status),
            status_message: ActiveValue::Set(params.status_message),
            announcement: ActiveValue::Set(params.announcement),
            updated_by: ActiveValue::Set(Some(params.updated_by)),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BotStatus::from_entity(entity))
    }
}
