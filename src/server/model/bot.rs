//! Bot status and live gateway statistics.

use chrono::{DateTime, Utc};

use crate::{
    model::bot::{BotInfoDto, BotStatusDto, UpdateBotStatusDto},
    server::error::AppError,
};

/// Status values accepted for the bot.
pub const BOT_STATUSES: [&str; 3] = ["online", "maintenance", "offline"];

/// Author recorded for status rows written by the periodic refresh.
pub const SYSTEM_AUTHOR: &str = "system";

#[derive(Debug, Clone, PartialEq)]
pub struct BotStatus {
    pub status: String,
    pub status_message: Option<String>,
    pub announcement: Option<String>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl BotStatus {
    /// Status reported when nothing has been stored yet.
    pub fn fallback() -> Self {
        Self {
            status: "online".to_string(),
            status_message: None,
            announcement: None,
            updated_by: None,
            updated_at: None,
        }
    }

    pub fn into_dto(self) -> BotStatusDto {
        BotStatusDto {
            status: self.status,
            status_message: self.status_message,
            announcement: self.announcement,
            updated_by: self.updated_by,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::bot_status::Model) -> Self {
        Self {
            status: entity.status,
            status_message: entity.status_message,
            announcement: entity.announcement,
            updated_by: entity.updated_by,
            updated_at: Some(entity.updated_at),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateBotStatusParams {
    pub status: String,
    pub status_message: Option<String>,
    pub announcement: Option<String>,
    pub updated_by: String,
}

impl UpdateBotStatusParams {
    pub fn from_dto(updated_by: String, dto: UpdateBotStatusDto) -> Result<Self, AppError> {
        if !BOT_STATUSES.contains(&dto.status.as_str()) {
            return Err(AppError::BadRequest("Invalid bot status data".to_string()));
        }

        Ok(Self {
            status: dto.status,
            status_message: dto.status_message,
            announcement: dto.announcement,
            updated_by,
        })
    }

    /// Status row written by the periodic refresh.
    pub fn system(info: Option<&BotInfo>) -> Self {
        let (status, message) = match info {
            Some(info) => ("online", format!("Connected - {}ms ping", info.ping)),
            None => ("offline", "Bot disconnected".to_string()),
        };

        Self {
            status: status.to_string(),
            status_message: Some(message),
            announcement: None,
            updated_by: SYSTEM_AUTHOR.to_string(),
        }
    }
}

/// Live statistics for the connected bot account.
#[derive(Debug, Clone, PartialEq)]
pub struct BotInfo {
    pub tag: String,
    /// Gateway heartbeat latency in milliseconds
    pub ping: u64,
    pub server_count: usize,
    pub user_count: u64,
    pub uptime_days: f64,
}

impl BotInfo {
    pub fn into_dto(self) -> BotInfoDto {
        BotInfoDto {
            tag: self.tag,
            ping: self.ping,
            server_count: self.server_count,
            user_count: self.user_count,
            uptime: self.uptime_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_status_reflects_connection() {
        let info = BotInfo {
            tag: "bot#0001".to_string(),
            ping: 42,
            server_count: 3,
            user_count: 10,
            uptime_days: 0.0,
        };

        let online = UpdateBotStatusParams::system(Some(&info));
        assert_eq!(online.status, "online");
        assert_eq!(online.status_message.as_deref(), Some("Connected - 42ms ping"));
        assert_eq!(online.updated_by, SYSTEM_AUTHOR);

        let offline = UpdateBotStatusParams::system(None);
        assert_eq!(offline.status, "offline");
        assert_eq!(offline.status_message.as_deref(), Some("Bot disconnected"));
    }

    #[test]
    fn rejects_unknown_status() {
        let dto = UpdateBotStatusDto {
            status: "sleeping".to_string(),
            status_message: None,
            announcement: None,
        };

        assert!(matches!(
            UpdateBotStatusParams::from_dto("owner".to_string(), dto),
            Err(AppError::BadRequest(_))
        ));
    }
}
