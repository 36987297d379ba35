//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Models that live only in the session
//! (`Identity`, `AuthorizedServer`, `SessionRecord`) are serde types since the session
//! store persists them as JSON.

pub mod bot;
pub mod guild;
pub mod identity;
pub mod rule;
pub mod server;
pub mod session;
pub mod statistics;
pub mod user;
