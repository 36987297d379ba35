use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::statistics::Statistics;

pub struct StatisticsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets up to `limit` statistics rows for a server, newest first.
    pub async fn get_recent_by_server_id(
        &self,
        server_id: &str,
        limit: u64,
    ) -> Result<Vec<Statistics>, DbErr> {
        let entities = entity::prelude::Statistics::find()
            .filter(entity::statistics::Column::ServerId.eq(server_id))
            .order_by_desc(entity::statistics::Column::Date)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Statistics::from_entity).collect())
    }
}
