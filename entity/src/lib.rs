//! SeaORM entity models for the guildboard database.

pub mod prelude;

pub mod bot_status;
pub mod discord_server;
pub mod rule;
pub mod statistics;
pub mod uptime_record;
pub mod user;
