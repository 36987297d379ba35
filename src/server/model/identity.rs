use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

/// A Discord user as returned from `/users/@me`.
///
/// Created on the first successful OAuth callback and stored in the session record;
/// it does not change for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub username: String,
    /// `"0"` for accounts migrated to unique usernames
    #[serde(default = "default_discriminator")]
    pub discriminator: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

fn default_discriminator() -> String {
    "0".to_string()
}

impl Identity {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            discriminator: self.discriminator,
            avatar: self.avatar,
            email: self.email,
        }
    }
}
