//! Rule factory for creating test moderation rules.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating rules scoped to a server.
///
/// The server referenced by `server_id` must already exist.
pub struct RuleFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    name: String,
    rule_type: String,
    description: String,
    trigger: Option<String>,
    is_active: bool,
}

impl<'a> RuleFactory<'a> {
    /// Creates a new RuleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"rule-{id}"`
    /// - rule_type: `"COMMAND"`
    /// - description: `"Test rule {id}"`
    /// - trigger: `None`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection, server_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            server_id: server_id.into(),
            name: format!("rule-{}", id),
            rule_type: "COMMAND".to_string(),
            description: format!("Test rule {}", id),
            trigger: None,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn rule_type(mut self, rule_type: impl Into<String>) -> Self {
        self.rule_type = rule_type.into();
        self
    }

    pub fn trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = Some(trigger.into());
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the rule entity into the database.
    pub async fn build(self) -> Result<entity::rule::Model, DbErr> {
        entity::rule::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            name: ActiveValue::Set(self.name),
            rule_type: ActiveValue::Set(self.rule_type),
            description: ActiveValue::Set(self.description),
            permission: ActiveValue::Set(None),
            trigger: ActiveValue::Set(self.trigger),
            usage_count: ActiveValue::Set(0),
            trigger_count: ActiveValue::Set(0),
            is_active: ActiveValue::Set(self.is_active),
            created_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rule with default values for the given server.
pub async fn create_rule(
    db: &DatabaseConnection,
    server_id: impl Into<String>,
) -> Result<entity::rule::Model, DbErr> {
    RuleFactory::new(db, server_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::discord_server::create_server};
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_rule_for_server() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(DiscordServer)
            .with_table(Rule)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let server = create_server(db).await?;
        let rule = RuleFactory::new(db, &server.id)
            .rule_type("AUTO")
            .trigger("spam")
            .build()
            .await?;

        assert_eq!(rule.server_id, server.id);
        assert_eq!(rule.rule_type, "AUTO");
        assert_eq!(rule.trigger.as_deref(), Some("spam"));
        assert!(rule.is_active);

        Ok(())
    }
}
