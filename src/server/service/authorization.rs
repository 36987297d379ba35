//! Authorization resolver.
//!
//! Decides which guilds a signed-in user may administer through the dashboard: the
//! guilds where they are a moderator (owner, `ADMINISTRATOR` or `MANAGE_GUILD`) and the
//! bot is present. The result is computed once at login and stored in the session, so
//! permission changes on Discord are only picked up at the next login.

use serenity::all::Permissions;
use std::{collections::HashMap, fmt::Display};

use crate::server::model::guild::{AuthorizedServer, BotGuild, GuildMembership};

/// Whether the user may moderate `guild` based on ownership and their permission bitmask.
pub fn is_moderator_eligible(guild: &GuildMembership) -> bool {
    guild.owner
        || Permissions::from_bits_truncate(guild.permissions)
            .intersects(Permissions::ADMINISTRATOR | Permissions::MANAGE_GUILD)
}

/// Intersects the user's moderator-eligible guilds with the bot's guilds.
///
/// Output follows the order of `user_guilds`. Member counts come from the bot side;
/// icon URLs are built from the user-side icon hash.
pub fn resolve_authorized_servers(
    user_guilds: &[GuildMembership],
    bot_guilds: &[BotGuild],
) -> Vec<AuthorizedServer> {
    let bot_by_id: HashMap<&str, &BotGuild> = bot_guilds
        .iter()
        .map(|guild| (guild.id.as_str(), guild))
        .collect();

    user_guilds
        .iter()
        .filter(|guild| is_moderator_eligible(guild))
        .filter_map(|guild| {
            let bot_guild = bot_by_id.get(guild.id.as_str())?;

            Some(AuthorizedServer {
                id: guild.id.clone(),
                name: guild.name.clone(),
                icon_url: guild.icon_url(),
                member_count: bot_guild.member_count,
                is_active: true,
            })
        })
        .collect()
}

/// Resolves the authorized set, yielding nothing if either guild list is unavailable.
pub fn resolve_or_fail_closed<E1, E2>(
    user_guilds: Result<Vec<GuildMembership>, E1>,
    bot_guilds: Result<Vec<BotGuild>, E2>,
) -> Vec<AuthorizedServer>
where
    E1: Display,
    E2: Display,
{
    match (user_guilds, bot_guilds) {
        (Ok(user_guilds), Ok(bot_guilds)) => resolve_authorized_servers(&user_guilds, &bot_guilds),
        (Err(e), _) => {
            tracing::warn!("User guild list unavailable, authorizing no servers: {}", e);
            Vec::new()
        }
        (_, Err(e)) => {
            tracing::warn!("Bot guild list unavailable, authorizing no servers: {}", e);
            Vec::new()
        }
    }
}
