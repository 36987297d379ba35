use serenity::all::{Context, GuildId, Member, User};

use super::GatewayState;

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(state: &GatewayState, _ctx: Context, new_member: Member) {
    let guild_id = new_member.guild_id.to_string();

    if let Some(guild) = state.guilds.write().await.get_mut(&guild_id) {
        guild.member_count = guild.member_count.saturating_add(1);
    }
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    state: &GatewayState,
    _ctx: Context,
    guild_id: GuildId,
    _user: User,
    _member_data_if_available: Option<Member>,
) {
    let guild_id = guild_id.to_string();

    if let Some(guild) = state.guilds.write().await.get_mut(&guild_id) {
        guild.member_count = guild.member_count.saturating_sub(1);
    }
}
