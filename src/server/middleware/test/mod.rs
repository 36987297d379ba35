use chrono::{Duration, Utc};
use test_utils::builder::TestBuilder;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::DashboardSession,
    },
    model::{
        guild::AuthorizedServer,
        identity::Identity,
        session::{AuthenticatedSession, SessionState},
    },
};


fn identity(id: &str) -> Identity {
    Identity {
        id: id.to_string(),
        username: format!("user{}", id),
        discriminator: "0".to_string(),
        avatar: None,
        email: None,
    }
}

fn authorized(id: &str) -> AuthorizedServer {
    AuthorizedServer {
        id: id.to_string(),
        name: format!("Server {}", id),
        icon_url: None,
        member_count: 10,
        is_active: true,
    }
}
