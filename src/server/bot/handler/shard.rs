use serenity::all::{ConnectionStage, Context, ShardStageUpdateEvent};

use super::GatewayState;

/// Tracks whether the shard is connected so status reads reflect drops and resumes.
pub async fn handle_shard_stage_update(
    state: &GatewayState,
    _ctx: Context,
    event: ShardStageUpdateEvent,
) {
    let connected = matches!(event.new, ConnectionStage::Connected);

    if connected != state.is_connected() {
        tracing::info!(
            "Shard {} stage changed from {:?} to {:?}",
            event.shard_id.0,
            event.old,
            event.new
        );
    }

    state.set_connected(connected);
}
