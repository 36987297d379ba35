//! User data repository for database operations.

use crate::server::model::user::{UpsertUserParam, User};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from their Discord profile.
    ///
    /// Inserts a new user or refreshes the profile fields and owner flag of an existing
    /// one. `created_at` is only written on insert.
    ///
    /// # Arguments
    /// - `param` - Profile fields and the owner flag evaluated for this login
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id),
            username: ActiveValue::Set(param.username),
            discriminator: ActiveValue::Set(param.discriminator),
            avatar: ActiveValue::Set(param.avatar),
            email: ActiveValue::Set(param.email),
            is_owner: ActiveValue::Set(param.is_owner),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns([
                    entity::user::Column::Username,
                    entity::user::Column::Discriminator,
                    entity::user::Column::Avatar,
                    entity::user::Column::Email,
                    entity::user::Column::IsOwner,
                    entity::user::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User has logged in before
    /// - `Ok(None)` - No user with this ID
    /// - `Err(DbErr)` - Database error during query
    #[cfg(test)]
    pub async fn find_by_discord_id(&self, discord_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}
