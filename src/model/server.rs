use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A server the signed-in user may administer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedServerDto {
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
    pub member_count: u64,
    pub is_active: bool,
}

/// A server record persisted by the dashboard.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscordServerDto {
    pub id: String,
    pub name: String,
    pub member_count: i64,
    pub icon_url: Option<String>,
    pub is_active: bool,
    pub added_at: DateTime<Utc>,
}
