use sea_orm::DatabaseConnection;

use crate::server::{
    bot::BotConnection,
    data::bot_status::BotStatusRepository,
    error::{bot::BotError, AppError},
    model::bot::{BotStatus, UpdateBotStatusParams},
};

pub struct BotStatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotStatusService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the most recent status, or the `online` fallback when none is stored
    pub async fn get_current(&self) -> Result<BotStatus, AppError> {
        let repo = BotStatusRepository::new(self.db);

        Ok(repo.latest().await?.unwrap_or_else(BotStatus::fallback))
    }

    /// Records a new status row. Older rows are kept as history.
    pub async fn update(&self, params: UpdateBotStatusParams) -> Result<BotStatus, AppError> {
        let repo = BotStatusRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Records a system status row from the bot's current connection state.
    ///
    /// # Returns
    /// - `Ok(Some(status))` - `online` or `offline` row written
    /// - `Ok(None)` - Bot is connected but its info could not be read; nothing written
    /// - `Err(AppError)` - Database error while writing the row
    pub async fn refresh(&self, bot: &BotConnection) -> Result<Option<BotStatus>, AppError> {
        let info = match bot.try_info().await {
            Ok(info) => Some(info),
            Err(BotError::Disconnected) => None,
            Err(e) => {
                tracing::warn!("Skipping bot status refresh, bot info unavailable: {}", e);
                return Ok(None);
            }
        };

        let status = self
            .update(UpdateBotStatusParams::system(info.as_ref()))
            .await?;

        Ok(Some(status))
    }
}
