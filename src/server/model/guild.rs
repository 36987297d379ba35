//! Guild models on both sides of the authorization join.
//!
//! `GuildMembership` comes from the user's OAuth token and carries their permissions,
//! `BotGuild` comes from the bot's gateway connection and carries the member count, and
//! `AuthorizedServer` is the joined result stored in the session.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::model::{bot::BotGuildDto, server::AuthorizedServerDto};

const DISCORD_CDN_URL: &str = "https://cdn.discordapp.com";

/// A guild the user belongs to, as listed by `/users/@me/guilds`.
///
/// Fetched fresh at each login and never persisted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GuildMembership {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Permission bitmask of the user in this guild.
    #[serde(deserialize_with = "deserialize_permissions")]
    pub permissions: u64,
    #[serde(default)]
    pub owner: bool,
}

impl GuildMembership {
    /// CDN URL for the guild icon, if the guild has one.
    pub fn icon_url(&self) -> Option<String> {
        self.icon.as_ref().map(|hash| guild_icon_url(&self.id, hash))
    }
}

/// Builds the CDN URL for a guild icon hash.
pub fn guild_icon_url(guild_id: &str, icon_hash: &str) -> String {
    format!("{}/icons/{}/{}.png", DISCORD_CDN_URL, guild_id, icon_hash)
}

/// Discord API v10 sends permissions as a decimal string; older versions send a number.
fn deserialize_permissions<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Bitmask {
        Text(String),
        Number(u64),
    }

    match Bitmask::deserialize(deserializer)? {
        Bitmask::Text(text) => text.parse::<u64>().map_err(de::Error::custom),
        Bitmask::Number(number) => Ok(number),
    }
}

/// A guild the bot account is a member of.
#[derive(Debug, Clone, PartialEq)]
pub struct BotGuild {
    pub id: String,
    pub name: String,
    pub member_count: u64,
    pub icon_url: Option<String>,
}

impl BotGuild {
    pub fn into_dto(self) -> BotGuildDto {
        BotGuildDto {
            id: self.id,
            name: self.name,
            member_count: self.member_count,
            icon_url: self.icon_url,
        }
    }
}

/// A server the signed-in user may administer through the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizedServer {
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
    pub member_count: u64,
    pub is_active: bool,
}

impl AuthorizedServer {
    pub fn into_dto(self) -> AuthorizedServerDto {
        AuthorizedServerDto {
            id: self.id,
            name: self.name,
            icon_url: self.icon_url,
            member_count: self.member_count,
            is_active: self.is_active,
        }
    }
}
