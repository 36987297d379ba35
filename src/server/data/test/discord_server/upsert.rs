use super::*;

/// Tests inserting a server seen for the first time.
///
/// Expected: Ok with the server stored and active
#[tokio::test]
async fn inserts_new_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordServerRepository::new(db);
    let server = repo.upsert(param("111", "Guild", 12)).await?;

    assert_eq!(server.id, "111");
    assert_eq!(server.member_count, 12);
    assert!(server.is_active);
    assert!(repo.find_by_id("111").await?.is_some());

    Ok(())
}

/// Tests refreshing an existing server keeps its original `added_at`.
///
/// Expected: Ok with name and member count updated, `added_at` unchanged
#[tokio::test]
async fn refreshes_existing_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::discord_server::DiscordServerFactory::new(db)
        .id("222")
        .name("Old")
        .active(false)
        .build()
        .await?;

    let repo = DiscordServerRepository::new(db);
    let server = repo.upsert(param("222", "New", 99)).await?;

    assert_eq!(server.name, "New");
    assert_eq!(server.member_count, 99);
    assert!(server.is_active);
    assert_eq!(server.added_at, existing.added_at);

    Ok(())
}
