use sea_orm::DatabaseConnection;

use crate::server::{
    data::{statistics::StatisticsRepository, uptime_record::UptimeRecordRepository},
    error::AppError,
    model::statistics::{Statistics, UptimeRecord},
};

/// Rows returned from the statistics endpoint when no limit is given.
pub const DEFAULT_STATISTICS_LIMIT: u64 = 10;

/// Rows returned from the uptime endpoint when no limit is given.
pub const DEFAULT_UPTIME_LIMIT: u64 = 30;

/// Upper bound on rows returned from either history endpoint.
pub const MAX_HISTORY_LIMIT: u64 = 365;

fn history_limit(limit: Option<u64>, default: u64) -> u64 {
    limit.unwrap_or(default).min(MAX_HISTORY_LIMIT)
}

pub struct StatisticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a server's daily statistics, newest first, capped at `MAX_HISTORY_LIMIT` rows
    pub async fn get_statistics(
        &self,
        server_id: &str,
        limit: Option<u64>,
    ) -> Result<Vec<Statistics>, AppError> {
        let repo = StatisticsRepository::new(self.db);

        Ok(repo
            .get_recent_by_server_id(server_id, history_limit(limit, DEFAULT_STATISTICS_LIMIT))
            .await?)
    }

    /// Gets a server's uptime history, newest first, capped at `MAX_HISTORY_LIMIT` rows
    pub async fn get_uptime(
        &self,
        server_id: &str,
        limit: Option<u64>,
    ) -> Result<Vec<UptimeRecord>, AppError> {
        let repo = UptimeRecordRepository::new(self.db);

        Ok(repo
            .get_recent_by_server_id(server_id, history_limit(limit, DEFAULT_UPTIME_LIMIT))
            .await?)
    }
}
