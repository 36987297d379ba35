use super::*;

/// Tests a partial update only changes the provided fields.
///
/// Expected: Ok(Some) with active flag flipped and name unchanged
#[tokio::test]
async fn applies_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .with_table(entity::prelude::Rule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let rule = factory::rule::RuleFactory::new(db, &server.id)
        .name("keep-me")
        .build()
        .await?;

    let updated = RuleRepository::new(db)
        .update(
            rule.id,
            UpdateRuleParams {
                is_active: Some(false),
                trigger: Some(Some("spam".to_string())),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "keep-me");
    assert!(!updated.is_active);
    assert_eq!(updated.trigger.as_deref(), Some("spam"));

    Ok(())
}

/// Tests clearing a rule's trigger.
///
/// Expected: trigger set to NULL, other fields untouched
#[tokio::test]
async fn clears_nullable_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let server = factory::create_server(db).await?;
    let rule = factory::rule::RuleFactory::new(db, &server.id)
        .trigger("!ping")
        .build()
        .await?;

    let updated = RuleRepository::new(db)
        .update(
            rule.id,
            UpdateRuleParams {
                trigger: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.trigger, None);
    assert_eq!(updated.name, rule.name);

    Ok(())
}

/// Tests updating a rule that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_rule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .with_table(entity::prelude::Rule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = RuleRepository::new(db)
        .update(404, UpdateRuleParams::default())
        .await?;

    assert!(updated.is_none());

    Ok(())
}
