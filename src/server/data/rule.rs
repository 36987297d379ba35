//! Rule data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::rule::{CreateRuleParams, Rule, UpdateRuleParams};

pub struct RuleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RuleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a rule with zeroed usage and trigger counters.
    pub async fn create(&self, params: CreateRuleParams) -> Result<Rule, DbErr> {
        let entity = entity::rule::ActiveModel {
            server_id: ActiveValue::Set(params.server_id),
            name: ActiveValue::Set(params.name),
            rule_type: ActiveValue::Set(params.rule_type),
            description: ActiveValue::Set(params.description),
            permission: ActiveValue::Set(params.permission),
            trigger: ActiveValue::Set(params.trigger),
            usage_count: ActiveValue::Set(0),
            trigger_count: ActiveValue::Set(0),
            is_active: ActiveValue::Set(params.is_active),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Rule::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Rule>, DbErr> {
        let entity = entity::prelude::Rule::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Rule::from_entity))
    }

    /// Gets all rules for a server in creation order.
    pub async fn get_by_server_id(&self, server_id: &str) -> Result<Vec<Rule>, DbErr> {
        let entities = entity::prelude::Rule::find()
            .filter(entity::rule::Column::ServerId.eq(server_id))
            .order_by_asc(entity::rule::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Rule::from_entity).collect())
    }

    /// Applies the fields present in `params` to an existing rule.
    ///
    /// # Returns
    /// - `Ok(Some(Rule))` - Updated rule
    /// - `Ok(None)` - No rule with this ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateRuleParams) -> Result<Option<Rule>, DbErr> {
        let Some(existing) = entity::prelude::Rule::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(rule_type) = params.rule_type {
            active.rule_type = ActiveValue::Set(rule_type);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(permission) = params.permission {
            active.permission = ActiveValue::Set(permission);
        }
        if let Some(trigger) = params.trigger {
            active.trigger = ActiveValue::Set(trigger);
        }
        if let Some(is_active) = params.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Rule::from_entity(entity)))
    }

    /// Deletes a rule by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - Rule existed and was deleted
    /// - `Ok(false)` - No rule with this ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Rule::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
