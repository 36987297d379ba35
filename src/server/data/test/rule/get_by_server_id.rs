use super::*;

/// Tests listing rules only returns those of the requested server.
///
/// Expected: Ok with the two rules of the first server in creation order
#[tokio::test]
async fn lists_rules_scoped_to_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .with_table(entity::prelude::Rule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;

    let first = factory::rule::RuleFactory::new(db, &server.id)
        .name("first")
        .build()
        .await?;
    let second = factory::rule::RuleFactory::new(db, &server.id)
        .name("second")
        .build()
        .await?;
    factory::create_rule(db, &other.id).await?;

    let rules = RuleRepository::new(db).get_by_server_id(&server.id).await?;

    let ids: Vec<i32> = rules.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing rules for a server without any.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_server_without_rules() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .with_table(entity::prelude::Rule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rules = RuleRepository::new(db).get_by_server_id("nothing").await?;

    assert!(rules.is_empty());

    Ok(())
}
