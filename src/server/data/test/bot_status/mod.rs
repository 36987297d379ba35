use crate::server::{data::bot_status::BotStatusRepository, model::bot::UpdateBotStatusParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests that an empty history has no current status.
///
/// Expected: Ok(None)
#[tokio::test]
async fn latest_is_none_without_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(BotStatusRepository::new(db).latest().await?.is_none());

    Ok(())
}

/// Tests that the newest row by `updated_at` is the current status.
///
/// Expected: Ok(Some) with the maintenance row even though it was inserted first
#[tokio::test]
async fn latest_returns_newest_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::bot_status::BotStatusFactory::new(db)
        .status("maintenance")
        .updated_at(Utc::now())
        .build()
        .await?;
    factory::bot_status::BotStatusFactory::new(db)
        .status("offline")
        .updated_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let latest = BotStatusRepository::new(db).latest().await?.unwrap();

    assert_eq!(latest.status, "maintenance");

    Ok(())
}

/// Tests appending a status row makes it current.
///
/// Expected: Ok with author recorded and returned by `latest`
#[tokio::test]
async fn create_appends_current_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotStatusRepository::new(db);
    repo.create(UpdateBotStatusParams {
        status: "maintenance".to_string(),
        status_message: Some("Upgrading".to_string()),
        announcement: Some("Back soon".to_string()),
        updated_by: "owner".to_string(),
    })
    .await?;

    let latest = repo.latest().await?.unwrap();
    assert_eq!(latest.status, "maintenance");
    assert_eq!(latest.announcement.as_deref(), Some("Back soon"));
    assert_eq!(latest.updated_by.as_deref(), Some("owner"));

    Ok(())
}
