//! Ready event handler.
//!
//! The `ready` event fires once the gateway handshake completes. The guilds it lists
//! are unavailable stubs; full guild data follows in `guild_create` events. Tracked
//! guilds absent from the list are dropped, since the bot left them while disconnected.

use chrono::Utc;
use serenity::all::{Context, Ready};

use super::GatewayState;

/// Records the bot tag and ready time, reconciles tracked guilds, then marks the
/// connection live.
pub async fn handle_ready(state: &GatewayState, _ctx: Context, ready: Ready) {
    let tag = ready.user.tag();

    let guild_ids: Vec<String> = ready.guilds.iter().map(|guild| guild.id.to_string()).collect();
    let removed = state
        .retain_guilds(guild_ids.iter().map(String::as_str))
        .await;
    if removed > 0 {
        tracing::info!("Dropped {} guilds the bot left while disconnected", removed);
    }

    tracing::info!(
        "{} is connected to Discord ({} guilds pending)",
        tag,
        ready.guilds.len()
    );

    *state.tag.write().await = Some(tag);
    *state.ready_at.write().await = Some(Utc::now());
    state.set_connected(true);
}
