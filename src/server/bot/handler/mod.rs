use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, Guild, GuildId, Member, Ready, ShardStageUpdateEvent, UnavailableGuild,
    User,
};
use serenity::async_trait;
use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};
use tokio::sync::{oneshot, RwLock};

use crate::server::model::guild::BotGuild;

pub mod guild;
pub mod member;
pub mod ready;
pub mod shard;

/// State written by the event handler and read through the gateway link.
#[derive(Default)]
pub struct GatewayState {
    pub connected: AtomicBool,
    pub tag: RwLock<Option<String>>,
    pub ready_at: RwLock<Option<DateTime<Utc>>>,
    /// Guilds keyed by guild ID
    pub guilds: RwLock<BTreeMap<String, BotGuild>>,
}

impl GatewayState {
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    /// Drops every tracked guild whose ID is not in `guild_ids`.
    ///
    /// A new gateway session lists every guild the bot still belongs to, so anything
    /// missing was left while the shard was away and no `guild_delete` will follow.
    pub async fn retain_guilds<'a>(&self, guild_ids: impl IntoIterator<Item = &'a str>) -> usize {
        let keep: BTreeSet<&str> = guild_ids.into_iter().collect();
        let mut guilds = self.guilds.write().await;
        let before = guilds.len();
        guilds.retain(|id, _| keep.contains(id.as_str()));

        before - guilds.len()
    }
}

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub state: Arc<GatewayState>,
    ready_tx: Mutex<Option<oneshot::Sender<()>>>,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        state: Arc<GatewayState>,
        ready_tx: oneshot::Sender<()>,
    ) -> Self {
        Self {
            db,
            state,
            ready_tx: Mutex::new(Some(ready_tx)),
        }
    }

    /// Signals the waiting connect call. Only the first ready event is forwarded.
    fn signal_ready(&self) {
        let sender = match self.ready_tx.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        if let Some(sender) = sender {
            let _ = sender.send(());
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
        self.signal_ready();
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, &self.state, ctx, guild, is_new).await;
    }

    /// Called when the bot leaves a guild or a guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(&self.db, &self.state, ctx, incomplete, full).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.state, ctx, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(&self.state, ctx, guild_id, user, member_data_if_available)
            .await;
    }

    /// Called when a shard connects, resumes or drops
    async fn shard_stage_update(&self, ctx: Context, event: ShardStageUpdateEvent) {
        shard::handle_shard_stage_update(&self.state, ctx, event).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot_guild(id: &str) -> BotGuild {
        BotGuild {
            id: id.to_string(),
            name: format!("Guild {}", id),
            member_count: 1,
            icon_url: None,
        }
    }

    async fn state_with(ids: &[&str]) -> GatewayState {
        let state = GatewayState::default();
        {
            let mut guilds = state.guilds.write().await;
            for id in ids {
                guilds.insert(id.to_string(), bot_guild(id));
            }
        }
        state
    }

    /// Tests reconciling tracked guilds against a new session's guild list.
    ///
    /// Verifies that a guild left while the shard was away is dropped and the rest kept.
    ///
    /// Expected: only "1" and "3" remain, one guild removed
    #[tokio::test]
    async fn retain_guilds_drops_guilds_missing_from_ready() {
        let state = state_with(&["1", "2", "3"]).await;

        let removed = state.retain_guilds(["1", "3", "4"]).await;

        let ids: Vec<String> = state.guilds.read().await.keys().cloned().collect();
        assert_eq!(removed, 1);
        assert_eq!(ids, vec!["1".to_string(), "3".to_string()]);
    }

    /// Tests reconciling against an empty guild list.
    ///
    /// Expected: no guilds remain
    #[tokio::test]
    async fn retain_guilds_with_empty_ready_clears_all() {
        let state = state_with(&["1", "2"]).await;

        let removed = state.retain_guilds(std::iter::empty()).await;

        assert_eq!(removed, 2);
        assert!(state.guilds.read().await.is_empty());
    }
}
