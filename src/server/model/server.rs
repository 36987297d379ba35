use chrono::{DateTime, Utc};

use crate::{
    model::server::DiscordServerDto,
    server::model::guild::{AuthorizedServer, BotGuild},
};

/// A server persisted in the `discord_server` table.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordServer {
    pub id: String,
    pub name: String,
    pub member_count: i64,
    pub icon_url: Option<String>,
    pub is_active: bool,
    pub added_at: DateTime<Utc>,
}

impl DiscordServer {
    pub fn into_dto(self) -> DiscordServerDto {
        DiscordServerDto {
            id: self.id,
            name: self.name,
            member_count: self.member_count,
            icon_url: self.icon_url,
            is_active: self.is_active,
            added_at: self.added_at,
        }
    }

    pub fn from_entity(entity: entity::discord_server::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            member_count: entity.member_count,
            icon_url: entity.icon_url,
            is_active: entity.is_active,
            added_at: entity.added_at,
        }
    }
}

/// Parameters for inserting or refreshing a server record.
///
/// `added_at` is only written on insert.
#[derive(Debug, Clone)]
pub struct UpsertServerParam {
    pub id: String,
    pub name: String,
    pub member_count: i64,
    pub icon_url: Option<String>,
    pub is_active: bool,
}

impl From<&AuthorizedServer> for UpsertServerParam {
    fn from(server: &AuthorizedServer) -> Self {
        Self {
            id: server.id.clone(),
            name: server.name.clone(),
            member_count: i64::try_from(server.member_count).unwrap_or(i64::MAX),
            icon_url: server.icon_url.clone(),
            is_active: server.is_active,
        }
    }
}

impl From<&BotGuild> for UpsertServerParam {
    fn from(guild: &BotGuild) -> Self {
        Self {
            id: guild.id.clone(),
            name: guild.name.clone(),
            member_count: i64::try_from(guild.member_count).unwrap_or(i64::MAX),
            icon_url: guild.icon_url.clone(),
            is_active: true,
        }
    }
}
