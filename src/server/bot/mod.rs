//! Guild membership source backed by the bot's Discord gateway connection.
//!
//! `BotConnection` is the single owned handle to the live connection and is cloned into
//! `AppState`. Connecting goes through a `GatewayConnector`, which yields a
//! `GatewayLink` for the live session; the serenity-backed implementation lives in
//! `serenity`, and the event handlers that keep the guild list current live in
//! `handler`.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild creation, updates, and deletion
//! - `GUILD_MESSAGES` - Message events in guild channels
//! - `GUILD_MEMBERS` - Member joins and leaves for member counts (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod connection;
pub mod gateway;
pub mod handler;
pub mod serenity;

#[cfg(test)]
pub mod fake;

pub use connection::BotConnection;
