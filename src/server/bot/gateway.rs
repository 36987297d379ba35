use async_trait::async_trait;
use std::sync::Arc;

use crate::server::{
    error::bot::BotError,
    model::{bot::BotInfo, guild::BotGuild},
};

/// Opens gateway connections for a bot token.
#[async_trait]
pub trait GatewayConnector: Send + Sync {
    /// Connects and waits until the gateway reports ready.
    async fn connect(&self, token: &str) -> Result<Arc<dyn GatewayLink>, BotError>;
}

/// A live gateway session.
#[async_trait]
pub trait GatewayLink: Send + Sync {
    /// Flips to false asynchronously when the connection drops.
    fn is_connected(&self) -> bool;

    async fn guilds(&self) -> Result<Vec<BotGuild>, BotError>;

    async fn info(&self) -> Result<BotInfo, BotError>;

    async fn shutdown(&self);
}
