//! Data transfer objects exchanged with the dashboard frontend.
//!
//! Every type here is part of the HTTP contract and serializes with camelCase field
//! names. Server-side domain models convert into these through `into_dto()`.

pub mod api;
pub mod bot;
pub mod rule;
pub mod server;
pub mod statistics;
pub mod user;
