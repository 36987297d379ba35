use crate::server::{
    data::discord_server::DiscordServerRepository, model::server::UpsertServerParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod deactivate;
mod upsert;

fn param(id: &str, name: &str, member_count: i64) -> UpsertServerParam {
    UpsertServerParam {
        id: id.to_string(),
        name: name.to_string(),
        member_count,
        icon_url: None,
        is_active: true,
    }
}
