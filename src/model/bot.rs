use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BotStatusDto {
    /// `online`, `maintenance` or `offline`
    pub status: String,
    pub status_message: Option<String>,
    pub announcement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBotStatusDto {
    pub status: String,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub announcement: Option<String>,
}

/// A guild the bot is currently connected to.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BotGuildDto {
    pub id: String,
    pub name: String,
    pub member_count: u64,
    #[serde(rename = "iconURL")]
    pub icon_url: Option<String>,
}

/// Live gateway statistics for the bot account.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BotInfoDto {
    pub tag: String,
    pub ping: u64,
    pub server_count: usize,
    pub user_count: u64,
    /// Days since the gateway connection became ready, fractional
    pub uptime: f64,
}
