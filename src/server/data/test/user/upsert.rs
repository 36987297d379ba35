use super::*;
use sea_orm::EntityTrait;

/// Tests creating a new user from a Discord profile.
///
/// Expected: Ok with profile fields stored and owner flag false
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert(param("123456789", "tester", false)).await?;

    assert_eq!(user.discord_id, "123456789");
    assert_eq!(user.username, "tester");
    assert!(!user.is_owner);

    Ok(())
}

/// Tests that a second login refreshes the profile without touching `created_at`.
///
/// Expected: Ok with username and owner flag updated, creation time unchanged
#[tokio::test]
async fn updates_existing_user_preserving_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.upsert(param("123456789", "before", false)).await?;
    let second = repo.upsert(param("123456789", "after", true)).await?;

    assert_eq!(second.username, "after");
    assert!(second.is_owner);
    assert_eq!(second.created_at, first.created_at);

    let count = entity::prelude::User::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}
