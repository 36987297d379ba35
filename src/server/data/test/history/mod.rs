//! Statistics and uptime history share their query shape: newest first, limited.

use crate::server::data::{
    statistics::StatisticsRepository, uptime_record::UptimeRecordRepository,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests statistics are returned newest first and truncated to the limit.
///
/// Expected: Ok with the two most recent days of the requested server
#[tokio::test]
async fn statistics_newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .with_table(entity::prelude::Statistics)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;
    let now = Utc::now();

    for days_ago in [2, 0, 1] {
        factory::statistics::StatisticsFactory::new(db, &server.id)
            .date(now - Duration::days(days_ago))
            .commands_executed(days_ago as i32)
            .build()
            .await?;
    }
    factory::create_statistics(db, &other.id).await?;

    let rows = StatisticsRepository::new(db)
        .get_recent_by_server_id(&server.id, 2)
        .await?;

    let commands: Vec<i32> = rows.iter().map(|r| r.commands_executed).collect();
    assert_eq!(commands, vec![0, 1]);

    Ok(())
}

/// Tests uptime records are returned newest first and truncated to the limit.
///
/// Expected: Ok with only the newest record
#[tokio::test]
async fn uptime_newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .with_table(entity::prelude::UptimeRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let now = Utc::now();

    factory::uptime_record::UptimeRecordFactory::new(db, &server.id)
        .date(now - Duration::days(1))
        .uptime(97.5)
        .incidents(2)
        .build()
        .await?;
    factory::uptime_record::UptimeRecordFactory::new(db, &server.id)
        .date(now)
        .uptime(100.0)
        .build()
        .await?;

    let rows = UptimeRecordRepository::new(db)
        .get_recent_by_server_id(&server.id, 1)
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].uptime, 100.0);
    assert_eq!(rows[0].incidents, 0);

    Ok(())
}
