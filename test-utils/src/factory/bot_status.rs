//! Bot status factory for seeding status history.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for bot status rows. Defaults to an `online` row written by `system` now.
pub struct BotStatusFactory<'a> {
    db: &'a DatabaseConnection,
    status: String,
    status_message: Option<String>,
    announcement: Option<String>,
    updated_at: DateTime<Utc>,
}

impl<'a> BotStatusFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            status: "online".to_string(),
            status_message: None,
            announcement: None,
            updated_at: Utc::now(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn status_message(mut self, status_message: impl Into<String>) -> Self {
        self.status_message = Some(status_message.into());
        self
    }

    pub fn announcement(mut self, announcement: impl Into<String>) -> Self {
        self.announcement = Some(announcement.into());
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub async fn build(self) -> Result<entity::bot_status::Model, DbErr> {
        entity::bot_status::ActiveModel {
            status: ActiveValue::Set(self.status),
            status_message: ActiveValue::Set(self.status_message),
            announcement: ActiveValue::Set(self.announcement),
            updated_by: ActiveValue::Set(Some("system".to_string())),
            updated_at: ActiveValue::Set(self.updated_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an `online` bot status row with default values.
pub async fn create_bot_status(db: &DatabaseConnection) -> Result<entity::bot_status::Model, DbErr> {
    BotStatusFactory::new(db).build().await
}
