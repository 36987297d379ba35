//! Database repository layer for all domain entities.
//!
//! Repositories hold a borrowed connection, use SeaORM entity models internally and
//! return domain models so the service layer never sees entity types.

pub mod bot_status;
pub mod discord_server;
pub mod rule;
pub mod statistics;
pub mod uptime_record;
pub mod user;

#[cfg(test)]
mod test;
