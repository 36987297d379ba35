//! Per-server statistics and uptime history.

use chrono::{DateTime, Utc};

use crate::model::statistics::{StatisticsDto, UptimeRecordDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub id: i32,
    pub server_id: String,
    pub date: DateTime<Utc>,
    pub server_count: i32,
    pub user_count: i32,
    pub commands_executed: i32,
}

impl Statistics {
    pub fn into_dto(self) -> StatisticsDto {
        StatisticsDto {
            id: self.id,
            server_id: self.server_id,
            date: self.date,
            server_count: self.server_count,
            user_count: self.user_count,
            commands_executed: self.commands_executed,
        }
    }

    pub fn from_entity(entity: entity::statistics::Model) -> Self {
        Self {
            id: entity.id,
            server_id: entity.server_id,
            date: entity.date,
            server_count: entity.server_count,
            user_count: entity.user_count,
            commands_executed: entity.commands_executed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UptimeRecord {
    pub id: i32,
    pub server_id: String,
    pub date: DateTime<Utc>,
    pub uptime: f64,
    pub incidents: i32,
}

impl UptimeRecord {
    pub fn into_dto(self) -> UptimeRecordDto {
        UptimeRecordDto {
            id: self.id,
            server_id: self.server_id,
            date: self.date,
            uptime: self.uptime,
            incidents: self.incidents,
        }
    }

    pub fn from_entity(entity: entity::uptime_record::Model) -> Self {
        Self {
            id: entity.id,
            server_id: entity.server_id,
            date: entity.date,
            uptime: entity.uptime,
            incidents: entity.incidents,
        }
    }
}
