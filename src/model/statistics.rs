use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsDto {
    pub id: i32,
    pub server_id: String,
    pub date: DateTime<Utc>,
    pub server_count: i32,
    pub user_count: i32,
    pub commands_executed: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UptimeRecordDto {
    pub id: i32,
    pub server_id: String,
    pub date: DateTime<Utc>,
    /// Percentage of the day the bot was reachable
    pub uptime: f64,
    pub incidents: i32,
}
