use super::*;

/// Tests deleting an existing rule.
///
/// Expected: Ok(true) and the rule can no longer be fetched
#[tokio::test]
async fn deletes_existing_rule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .with_table(entity::prelude::Rule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let rule = factory::create_rule(db, &server.id).await?;

    let repo = RuleRepository::new(db);
    assert!(repo.delete(rule.id).await?);
    assert!(repo.get_by_id(rule.id).await?.is_none());

    Ok(())
}

/// Tests deleting a rule that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_rule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .with_table(entity::prelude::Rule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!RuleRepository::new(db).delete(404).await?);

    Ok(())
}
