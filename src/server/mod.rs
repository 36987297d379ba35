//! Dashboard backend.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access checks and DTO conversion
//! - **Service Layer** (`service/`) - Login orchestration, authorization resolution and
//!   business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, session record and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session record access and the authentication gate
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, bot handle)
//! - **Startup** (`startup`) - Initialization of database, sessions and clients
//! - **Router** (`router`) and **Docs** (`docs`) - Route table and OpenAPI document
//! - **Scheduler** (`scheduler/`) - Periodic bot status refresh
//! - **Bot** (`bot/`) - Gateway connection and guild membership source

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
