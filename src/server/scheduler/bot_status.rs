use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{bot::BotConnection, error::AppError, service::bot_status::BotStatusService};

/// Runs at second 0 of every tenth minute.
const REFRESH_SCHEDULE: &str = "0 */10 * * * *";

/// Starts the bot status scheduler
///
/// Every 10 minutes a status row is written from the bot's connection state: `online`
/// with the current ping while connected, `offline` when disconnected. Failures are logged and
/// the next tick runs as usual.
///
/// # Arguments
/// - `db`: Database connection
/// - `bot`: Handle to the bot's gateway connection, only read
pub async fn start_scheduler(
    db: DatabaseConnection,
    bot: BotConnection,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(REFRESH_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let bot = bot.clone();

        Box::pin(async move {
            refresh_bot_status(&db, &bot).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Bot status scheduler started");

    Ok(scheduler)
}

/// Writes one system status row, logging instead of returning errors.
///
/// Nothing is written when the bot is connected but its info cannot be read.
pub async fn refresh_bot_status(db: &DatabaseConnection, bot: &BotConnection) {
    match BotStatusService::new(db).refresh(bot).await {
        Ok(Some(status)) => tracing::debug!(
            "Bot status refreshed: {} ({})",
            status.status,
            status.status_message.unwrap_or_default()
        ),
        Ok(None) => {}
        Err(e) => tracing::error!("Error refreshing bot status: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use entity::prelude::BotStatus;
    use sea_orm::{DbErr, EntityTrait};
    use test_utils::builder::TestBuilder;

    use super::*;
    use crate::server::bot::fake::FakeConnector;

    /// Tests a refresh tick when the status table is missing.
    ///
    /// Expected: the error is swallowed
    #[tokio::test]
    async fn refresh_swallows_storage_errors() -> Result<(), DbErr> {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let bot = BotConnection::new(Arc::new(FakeConnector::default()));

        refresh_bot_status(db, &bot).await;

        Ok(())
    }

    /// Tests a refresh tick with a disconnected bot.
    ///
    /// Expected: one offline row written by system
    #[tokio::test]
    async fn refresh_writes_offline_row() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_dashboard_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let bot = BotConnection::new(Arc::new(FakeConnector::default()));

        refresh_bot_status(db, &bot).await;

        let rows = BotStatus::find().all(db).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, "offline");
        assert_eq!(rows[0].updated_by.as_deref(), Some("system"));

        Ok(())
    }
}
