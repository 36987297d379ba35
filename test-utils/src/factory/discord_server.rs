//! Discord server factory for creating test server entities.

use crate::factory::helpers::next_snowflake;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating servers known to the dashboard.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::discord_server::DiscordServerFactory;
///
/// let server = DiscordServerFactory::new(&db)
///     .id("987654321")
///     .name("CustomServer")
///     .member_count(42)
///     .build()
///     .await?;
/// ```
pub struct DiscordServerFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    member_count: i64,
    icon_url: Option<String>,
    is_active: bool,
}

impl<'a> DiscordServerFactory<'a> {
    /// Creates a new DiscordServerFactory with default values.
    ///
    /// Defaults:
    /// - id: unique snowflake-shaped string
    /// - name: `"Server {id}"`
    /// - member_count: `10`
    /// - icon_url: `None`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_snowflake();
        Self {
            db,
            name: format!("Server {}", id),
            id,
            member_count: 10,
            icon_url: None,
            is_active: true,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn member_count(mut self, member_count: i64) -> Self {
        self.member_count = member_count;
        self
    }

    pub fn icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the server entity into the database.
    pub async fn build(self) -> Result<entity::discord_server::Model, DbErr> {
        entity::discord_server::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            member_count: ActiveValue::Set(self.member_count),
            icon_url: ActiveValue::Set(self.icon_url),
            is_active: ActiveValue::Set(self.is_active),
            added_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::discord_server::Model, DbErr> {
    DiscordServerFactory::new(db).build().await
}

/// Creates a server with a specific guild ID.
///
/// # Example
///
/// ```rust,ignore
/// let server = create_server_with_id(db, "555").await?;
/// ```
pub async fn create_server_with_id(
    db: &DatabaseConnection,
    id: impl Into<String>,
) -> Result<entity::discord_server::Model, DbErr> {
    DiscordServerFactory::new(db).id(id).build().await
}
