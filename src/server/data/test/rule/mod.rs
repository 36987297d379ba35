use crate::server::{
    data::rule::RuleRepository,
    model::rule::{CreateRuleParams, UpdateRuleParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_server_id;
mod update;

fn create_params(server_id: &str, name: &str) -> CreateRuleParams {
    CreateRuleParams {
        server_id: server_id.to_string(),
        name: name.to_string(),
        rule_type: "AUTO".to_string(),
        description: "Deletes invite links".to_string(),
        permission: None,
        trigger: Some("discord.gg/".to_string()),
        is_active: true,
        created_by: Some("moderator".to_string()),
    }
}
