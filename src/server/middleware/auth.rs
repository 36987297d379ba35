//! Request gate and per-route permission checks.

use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::DashboardSession,
    model::session::AuthenticatedSession,
};

pub enum Permission<'a> {
    /// Identity ID must be one of the configured owner IDs.
    Owner(&'a [String]),
    /// Server must be in the authorized set resolved at login.
    ManageServer(&'a str),
}

pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Requires an authenticated session satisfying every permission.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedSession)` - Session is authenticated and all checks passed
    /// - `Err(AuthError::NotAuthenticated)` - Anonymous, pending or expired session
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(
        &self,
        permissions: &[Permission<'_>],
    ) -> Result<AuthenticatedSession, AppError> {
        let Some(auth) = DashboardSession::new(self.session).authenticated().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        for permission in permissions {
            match permission {
                Permission::Owner(owner_ids) => {
                    if !owner_ids.contains(&auth.identity.id) {
                        return Err(AuthError::AccessDenied(format!(
                            "User {} attempted an owner-only action",
                            auth.identity.id
                        ))
                        .into());
                    }
                }
                Permission::ManageServer(server_id) => {
                    if !auth.can_manage(server_id) {
                        return Err(AuthError::AccessDenied(format!(
                            "User {} is not authorized for server {}",
                            auth.identity.id, server_id
                        ))
                        .into());
                    }
                }
            }
        }

        Ok(auth)
    }
}

/// Rejects requests without an authenticated session with a uniform 401.
pub async fn require_auth(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    AuthGuard::new(&session).require(&[]).await?;

    Ok(next.run(request).await)
}
