//! Statistics factory for creating daily statistics rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct StatisticsFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    date: DateTime<Utc>,
    server_count: i32,
    user_count: i32,
    commands_executed: i32,
}

impl<'a> StatisticsFactory<'a> {
    /// Creates a new StatisticsFactory dated now with every counter at `1`.
    pub fn new(db: &'a DatabaseConnection, server_id: impl Into<String>) -> Self {
        Self {
            db,
            server_id: server_id.into(),
            date: Utc::now(),
            server_count: 1,
            user_count: 1,
            commands_executed: 1,
        }
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn commands_executed(mut self, commands_executed: i32) -> Self {
        self.commands_executed = commands_executed;
        self
    }

    pub fn user_count(mut self, user_count: i32) -> Self {
        self.user_count = user_count;
        self
    }

    pub async fn build(self) -> Result<entity::statistics::Model, DbErr> {
        entity::statistics::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            date: ActiveValue::Set(self.date),
            server_count: ActiveValue::Set(self.server_count),
            user_count: ActiveValue::Set(self.user_count),
            commands_executed: ActiveValue::Set(self.commands_executed),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a statistics row dated now for the given server.
pub async fn create_statistics(
    db: &DatabaseConnection,
    server_id: impl Into<String>,
) -> Result<entity::statistics::Model, DbErr> {
    StatisticsFactory::new(db, server_id).build().await
}
