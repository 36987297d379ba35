//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::server::model::identity::Identity;

/// A dashboard user persisted at login.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub discord_id: String,
    pub username: String,
    pub is_owner: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            discord_id: entity.discord_id,
            username: entity.username,
            is_owner: entity.is_owner,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for upserting a user after a successful OAuth callback.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub discord_id: String,
    pub username: String,
    pub discriminator: String,
    pub avatar: Option<String>,
    pub email: Option<String>,
    /// Whether the user is listed in `OWNER_IDS`; re-evaluated on every login.
    pub is_owner: bool,
}

impl UpsertUserParam {
    pub fn from_identity(identity: &Identity, owner_ids: &[String]) -> Self {
        Self {
            discord_id: identity.id.clone(),
            username: identity.username.clone(),
            discriminator: identity.discriminator.clone(),
            avatar: identity.avatar.clone(),
            email: identity.email.clone(),
            is_owner: owner_ids.iter().any(|id| id == &identity.id),
        }
    }
}
