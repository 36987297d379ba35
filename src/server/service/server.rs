use sea_orm::DatabaseConnection;

use crate::server::{
    data::discord_server::DiscordServerRepository, error::AppError,
    model::server::DiscordServer,
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the persisted record for a server
    pub async fn get_by_id(&self, id: &str) -> Result<Option<DiscordServer>, AppError> {
        let repo = DiscordServerRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }
}
