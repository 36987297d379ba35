use super::*;

/// Tests creating a rule for an existing server.
///
/// Expected: Ok with counters zeroed and author recorded
#[tokio::test]
async fn creates_rule_with_zeroed_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .with_table(entity::prelude::Rule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;

    let rule = RuleRepository::new(db)
        .create(create_params(&server.id, "no-invites"))
        .await?;

    assert_eq!(rule.server_id, server.id);
    assert_eq!(rule.name, "no-invites");
    assert_eq!(rule.usage_count, 0);
    assert_eq!(rule.trigger_count, 0);
    assert_eq!(rule.created_by.as_deref(), Some("moderator"));

    Ok(())
}
