use sea_orm::DatabaseConnection;

use crate::server::{
    data::{discord_server::DiscordServerRepository, rule::RuleRepository},
    error::AppError,
    model::rule::{CreateRuleParams, Rule, UpdateRuleParams},
};

pub struct RuleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RuleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all rules configured for a server
    pub async fn get_by_server_id(&self, server_id: &str) -> Result<Vec<Rule>, AppError> {
        let repo = RuleRepository::new(self.db);

        Ok(repo.get_by_server_id(server_id).await?)
    }

    /// Gets a rule by ID, used to resolve the owning server before permission checks
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Rule>, AppError> {
        let repo = RuleRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Creates a rule for an existing server.
    ///
    /// # Returns
    /// - `Ok(Rule)` - The created rule
    /// - `Err(AppError::NotFound)` - The server has no persisted record
    pub async fn create(&self, params: CreateRuleParams) -> Result<Rule, AppError> {
        let server_repo = DiscordServerRepository::new(self.db);
        if server_repo.find_by_id(&params.server_id).await?.is_none() {
            return Err(AppError::NotFound("Server not found".to_string()));
        }

        let rule = RuleRepository::new(self.db).create(params).await?;

        tracing::debug!("Created rule {} for server {}", rule.id, rule.server_id);

        Ok(rule)
    }

    pub async fn update(&self, id: i32, params: UpdateRuleParams) -> Result<Rule, AppError> {
        RuleRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Rule not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = RuleRepository::new(self.db).delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Rule not found".to_string()));
        }

        Ok(())
    }
}
