use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The signed-in Discord identity as shown to the frontend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub discriminator: String,
    pub avatar: Option<String>,
    pub email: Option<String>,
}
