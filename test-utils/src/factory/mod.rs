//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization and
//! a `create_*` convenience function for quick default creation. Server-scoped factories
//! take the owning server ID, so create a `discord_server` first.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let server = factory::create_server(db).await?;
//! let rule = factory::rule::RuleFactory::new(db, &server.id)
//!     .name("no-spam")
//!     .rule_type("AUTO")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Dashboard users
//! - `discord_server` - Servers known to the dashboard
//! - `rule` - Moderation rules scoped to a server
//! - `statistics` - Daily statistics rows scoped to a server
//! - `uptime_record` - Daily uptime rows scoped to a server
//! - `bot_status` - Bot status history rows
//! - `helpers` - ID generation

pub mod bot_status;
pub mod discord_server;
pub mod helpers;
pub mod rule;
pub mod statistics;
pub mod uptime_record;
pub mod user;

pub use bot_status::create_bot_status;
pub use discord_server::{create_server, create_server_with_id};
pub use rule::create_rule;
pub use statistics::create_statistics;
pub use uptime_record::create_uptime_record;
pub use user::create_user;
