//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the data layer. They work with domain
//! models, coordinate repository calls with the Discord API and the bot connection, and
//! turn missing records into `AppError::NotFound`.

pub mod auth;
pub mod authorization;
pub mod bot_status;
pub mod oauth;
pub mod rule;
pub mod server;
pub mod statistics;
