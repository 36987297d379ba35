//! Gateway connector backed by a serenity client.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents, ShardManager};
use std::{sync::Arc, time::Duration};
use tokio::sync::oneshot;

use crate::server::{
    bot::{
        gateway::{GatewayConnector, GatewayLink},
        handler::{GatewayState, Handler},
    },
    error::bot::BotError,
    model::{bot::BotInfo, guild::BotGuild},
};

/// Time allowed between starting the client and the gateway `ready` event.
const READY_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SerenityConnector {
    db: DatabaseConnection,
}

impl SerenityConnector {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GatewayConnector for SerenityConnector {
    async fn connect(&self, token: &str) -> Result<Arc<dyn GatewayLink>, BotError> {
        let intents =
            GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::GUILD_MEMBERS;

        let state = Arc::new(GatewayState::default());
        let (ready_tx, ready_rx) = oneshot::channel();
        let handler = Handler::new(self.db.clone(), state.clone(), ready_tx);

        let mut client = Client::builder(token, intents)
            .event_handler(handler)
            .await?;

        let shard_manager = client.shard_manager.clone();
        let mut task = tokio::spawn(async move { client.start().await });

        let ready = tokio::time::timeout(READY_TIMEOUT, async {
            tokio::select! {
                signal = ready_rx => signal.map_err(|_| BotError::ClosedBeforeReady),
                result = &mut task => match result {
                    Ok(Err(e)) => Err(BotError::from(e)),
                    _ => Err(BotError::ClosedBeforeReady),
                },
            }
        })
        .await;

        let ready = match ready {
            Ok(ready) => ready,
            Err(_) => Err(BotError::ReadyTimeout),
        };

        if let Err(e) = ready {
            shard_manager.shutdown_all().await;
            task.abort();
            return Err(e);
        }

        let watched = state.clone();
        tokio::spawn(async move {
            match task.await {
                Ok(Ok(())) => tracing::info!("Discord client stopped"),
                Ok(Err(e)) => tracing::error!("Discord client error: {:?}", e),
                Err(e) => tracing::error!("Discord client task failed: {:?}", e),
            }
            watched.set_connected(false);
        });

        Ok(Arc::new(SerenityLink {
            state,
            shard_manager,
        }))
    }
}

struct SerenityLink {
    state: Arc<GatewayState>,
    shard_manager: Arc<ShardManager>,
}

#[async_trait]
impl GatewayLink for SerenityLink {
    fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    async fn guilds(&self) -> Result<Vec<BotGuild>, BotError> {
        Ok(self.state.guilds.read().await.values().cloned().collect())
    }

    async fn info(&self) -> Result<BotInfo, BotError> {
        let ping = {
            let runners = self.shard_manager.runners.lock().await;
            runners
                .values()
                .filter_map(|runner| runner.latency)
                .map(|latency| latency.as_millis() as u64)
                .max()
                .unwrap_or(0)
        };

        let tag = self.state.tag.read().await.clone().unwrap_or_default();
        let uptime_days = self
            .state
            .ready_at
            .read()
            .await
            .map(|ready_at| uptime_days_since(ready_at, Utc::now()))
            .unwrap_or(0.0);

        let guilds = self.state.guilds.read().await;

        Ok(BotInfo {
            tag,
            ping,
            server_count: guilds.len(),
            user_count: guilds.values().map(|guild| guild.member_count).sum(),
            uptime_days,
        })
    }

    async fn shutdown(&self) {
        self.state.set_connected(false);
        self.shard_manager.shutdown_all().await;
    }
}

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Days elapsed between `ready_at` and `now`, fractional and never negative.
fn uptime_days_since(ready_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    ((now - ready_at).num_milliseconds().max(0) as f64) / MILLIS_PER_DAY
}
