use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::statistics::UptimeRecord;

pub struct UptimeRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UptimeRecordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets up to `limit` uptime records for a server, newest first.
    pub async fn get_recent_by_server_id(
        &self,
        server_id: &str,
        limit: u64,
    ) -> Result<Vec<UptimeRecord>, DbErr> {
        let entities = entity::prelude::UptimeRecord::find()
            .filter(entity::uptime_record::Column::ServerId.eq(server_id))
            .order_by_desc(entity::uptime_record::Column::Date)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UptimeRecord::from_entity).collect())
    }
}
