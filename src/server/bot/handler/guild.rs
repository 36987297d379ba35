//! Guild event handlers keeping the bot's guild list and the `discord_server` table current.
//!
//! `guild_create` fires for every guild on startup, when the bot joins a guild, and
//! when a guild recovers from an outage. `guild_delete` fires when the bot is removed
//! from a guild or the guild becomes unavailable.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild, UnavailableGuild};

use super::GatewayState;
use crate::server::{
    data::discord_server::DiscordServerRepository,
    model::{
        guild::{guild_icon_url, BotGuild},
        server::UpsertServerParam,
    },
};

/// Converts gateway guild data into the bot's guild view.
pub fn bot_guild_from(guild: &Guild) -> BotGuild {
    let id = guild.id.to_string();
    let icon_url = guild
        .icon
        .as_ref()
        .map(|hash| guild_icon_url(&id, &hash.to_string()));

    BotGuild {
        id,
        name: guild.name.clone(),
        member_count: guild.member_count,
        icon_url,
    }
}

pub async fn handle_guild_create(
    db: &DatabaseConnection,
    state: &GatewayState,
    _ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let bot_guild = bot_guild_from(&guild);

    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}",
        bot_guild.name,
        bot_guild.id,
        bot_guild.member_count,
    );

    let param = UpsertServerParam::from(&bot_guild);
    state
        .guilds
        .write()
        .await
        .insert(bot_guild.id.clone(), bot_guild);

    if let Err(e) = DiscordServerRepository::new(db).upsert(param).await {
        tracing::error!("Failed to upsert server {}: {:?}", guild.id, e);
    }
}

pub async fn handle_guild_delete(
    db: &DatabaseConnection,
    state: &GatewayState,
    _ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    let guild_id = incomplete.id.to_string();

    // Outage, the bot is still a member
    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable", guild_id);
        return;
    }

    state.guilds.write().await.remove(&guild_id);

    match DiscordServerRepository::new(db).deactivate(&guild_id).await {
        Ok(true) => tracing::info!("Bot removed from guild {}, server deactivated", guild_id),
        Ok(false) => tracing::debug!("Bot removed from untracked guild {}", guild_id),
        Err(e) => tracing::error!("Failed to deactivate server {}: {:?}", guild_id, e),
    }
}
