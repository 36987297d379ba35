use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::server::{
    bot::gateway::{GatewayConnector, GatewayLink},
    error::bot::BotError,
    model::{bot::BotInfo, guild::BotGuild},
};

/// Handle to the bot's single gateway connection.
///
/// Clones share the same connection. `connect` and `disconnect` are serialized so two
/// live links never exist under one handle.
#[derive(Clone)]
pub struct BotConnection {
    connector: Arc<dyn GatewayConnector>,
    link: Arc<RwLock<Option<Arc<dyn GatewayLink>>>>,
    connect_lock: Arc<Mutex<()>>,
}

impl BotConnection {
    pub fn new(connector: Arc<dyn GatewayConnector>) -> Self {
        Self {
            connector,
            link: Arc::new(RwLock::new(None)),
            connect_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Connects with `token`, tearing down any existing connection first.
    ///
    /// Suspends until the gateway reports ready or the connector gives up.
    pub async fn connect(&self, token: &str) -> Result<(), BotError> {
        let _guard = self.connect_lock.lock().await;

        let previous = self.link.write().await.take();
        if let Some(previous) = previous {
            tracing::info!("Closing existing Discord gateway connection before reconnecting");
            previous.shutdown().await;
        }

        let link = self.connector.connect(token).await?;
        *self.link.write().await = Some(link);

        tracing::info!("Discord gateway connection ready");

        Ok(())
    }

    pub async fn disconnect(&self) {
        let _guard = self.connect_lock.lock().await;

        let previous = self.link.write().await.take();
        if let Some(previous) = previous {
            previous.shutdown().await;
            tracing::info!("Discord gateway connection closed");
        }
    }

    pub async fn connection_status(&self) -> bool {
        self.live_link().await.is_some()
    }

    /// Guilds the bot belongs to, or an empty list when disconnected or on error.
    pub async fn list_guilds(&self) -> Vec<BotGuild> {
        match self.try_list_guilds().await {
            Ok(guilds) => guilds,
            Err(BotError::Disconnected) => Vec::new(),
            Err(e) => {
                tracing::error!("Failed to list bot guilds: {}", e);
                Vec::new()
            }
        }
    }

    /// Guilds the bot belongs to.
    ///
    /// # Returns
    /// - `Ok(Vec<BotGuild>)` - Current guild list
    /// - `Err(BotError::Disconnected)` - No live connection
    pub async fn try_list_guilds(&self) -> Result<Vec<BotGuild>, BotError> {
        let link = self.live_link().await.ok_or(BotError::Disconnected)?;
        link.guilds().await
    }

    pub async fn try_info(&self) -> Result<BotInfo, BotError> {
        let link = self.live_link().await.ok_or(BotError::Disconnected)?;
        link.info().await
    }

    async fn live_link(&self) -> Option<Arc<dyn GatewayLink>> {
        let link = self.link.read().await.clone()?;
        link.is_connected().then_some(link)
    }
}
