//! Uptime record factory for creating daily uptime rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct UptimeRecordFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    date: DateTime<Utc>,
    uptime: f64,
    incidents: i32,
}

impl<'a> UptimeRecordFactory<'a> {
    /// Creates a new UptimeRecordFactory dated now with 100% uptime and no incidents.
    pub fn new(db: &'a DatabaseConnection, server_id: impl Into<String>) -> Self {
        Self {
            db,
            server_id: server_id.into(),
            date: Utc::now(),
            uptime: 100.0,
            incidents: 0,
        }
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn uptime(mut self, uptime: f64) -> Self {
        self.uptime = uptime;
        self
    }

    pub fn incidents(mut self, incidents: i32) -> Self {
        self.incidents = incidents;
        self
    }

    pub async fn build(self) -> Result<entity::uptime_record::Model, DbErr> {
        entity::uptime_record::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            date: ActiveValue::Set(self.date),
            uptime: ActiveValue::Set(self.uptime),
            incidents: ActiveValue::Set(self.incidents),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an uptime record dated now for the given server.
pub async fn create_uptime_record(
    db: &DatabaseConnection,
    server_id: impl Into<String>,
) -> Result<entity::uptime_record::Model, DbErr> {
    UptimeRecordFactory::new(db, server_id).build().await
}
