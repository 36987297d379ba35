//! Guildboard Test Utils
//!
//! Shared testing utilities for the guildboard dashboard backend. This crate offers a
//! builder for test contexts backed by in-memory SQLite databases, entity factories, and
//! a local stand-in for Discord's OAuth2 and REST endpoints.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//! - **discord**: `MockDiscord`, a tiny HTTP server imitating Discord's API
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_rules() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_dashboard_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod discord;
pub mod error;
pub mod factory;
