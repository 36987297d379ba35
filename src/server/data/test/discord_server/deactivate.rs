use super::*;

/// Tests deactivating a server the bot has left.
///
/// Expected: Ok(true) and the stored row is inactive
#[tokio::test]
async fn deactivates_known_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;

    let repo = DiscordServerRepository::new(db);
    assert!(repo.deactivate(&server.id).await?);

    let stored = repo.find_by_id(&server.id).await?.unwrap();
    assert!(!stored.is_active);

    Ok(())
}

/// Tests deactivating an unknown server.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!DiscordServerRepository::new(db).deactivate("404").await?);

    Ok(())
}
