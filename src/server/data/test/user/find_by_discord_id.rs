use super::*;
use test_utils::factory;

/// Tests finding a user that has logged in before.
///
/// Expected: Ok(Some) with the stored username
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .username("lookup")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_discord_id(&stored.discord_id)
        .await?;

    assert_eq!(found.map(|u| u.username), Some("lookup".to_string()));

    Ok(())
}

/// Tests looking up an unknown Discord ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db).find_by_discord_id("999").await?;

    assert!(found.is_none());

    Ok(())
}
