//! HTTP request handlers.
//!
//! Handlers check access through `AuthGuard`, convert DTOs into params, call a service and
//! convert the returned domain model back into a DTO.

pub mod auth;
pub mod bot_status;
pub mod discord;
pub mod rule;
pub mod server;
pub mod statistics;

#[cfg(test)]
mod test;
