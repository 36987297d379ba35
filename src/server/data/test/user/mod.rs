use crate::server::{data::user::UserRepository, model::user::UpsertUserParam};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod find_by_discord_id;
mod upsert;

fn param(discord_id: &str, username: &str, is_owner: bool) -> UpsertUserParam {
    UpsertUserParam {
        discord_id: discord_id.to_string(),
        username: username.to_string(),
        discriminator: "0".to_string(),
        avatar: None,
        email: Some(format!("{}@example.com", username)),
        is_owner,
    }
}
