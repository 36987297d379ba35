//! Typed access to the dashboard's session record.
//!
//! The whole login lifecycle lives under one session key as a `SessionRecord`, so
//! reads and writes always see a consistent state. An authenticated record older than
//! `SESSION_TTL_DAYS` is removed on read and the session is treated as anonymous.

use chrono::Utc;
use tower_sessions::{session, Session};

use crate::server::{
    error::AppError,
    model::session::{AuthenticatedSession, SessionRecord},
};

#[cfg(test)]
use crate::server::model::session::SessionState;

const SESSION_DASHBOARD_RECORD: &str = "dashboard:session";

pub struct DashboardSession<'a> {
    session: &'a Session,
}

impl<'a> DashboardSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Reads the current record, dropping it first if the authenticated session expired
    /// or the stored value no longer deserializes.
    ///
    /// # Returns
    /// - `Ok(Some(record))` - Login pending or authenticated
    /// - `Ok(None)` - Anonymous
    /// - `Err(AppError::SessionErr(_))` - Session store failure
    pub async fn record(&self) -> Result<Option<SessionRecord>, AppError> {
        let record = match self
            .session
            .get::<SessionRecord>(SESSION_DASHBOARD_RECORD)
            .await
        {
            Ok(record) => record,
            Err(session::Error::SerdeJson(e)) => {
                tracing::warn!("Discarding unreadable session record: {}", e);
                self.clear().await?;
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(SessionRecord::Authenticated(auth)) = &record {
            if auth.is_expired(Utc::now()) {
                tracing::debug!("Session for user {} expired", auth.identity.id);
                self.clear().await?;
                return Ok(None);
            }
        }

        Ok(record)
    }

    #[cfg(test)]
    pub async fn state(&self) -> Result<SessionState, AppError> {
        Ok(SessionState::from(self.record().await?.as_ref()))
    }

    /// Stores the `state` sent with the login redirect, replacing any previous record.
    pub async fn begin_oauth(&self, oauth_state: String) -> Result<(), AppError> {
        self.session
            .insert(
                SESSION_DASHBOARD_RECORD,
                SessionRecord::PendingOauth {
                    oauth_state,
                    issued_at: Utc::now(),
                },
            )
            .await?;

        Ok(())
    }

    /// Removes the record and returns the pending OAuth state if there was one.
    ///
    /// The record is consumed whatever its state, so a callback can only be
    /// processed once per login redirect.
    pub async fn take_oauth_state(&self) -> Result<Option<String>, AppError> {
        let record = self
            .session
            .remove_value(SESSION_DASHBOARD_RECORD)
            .await?
            .and_then(|value| serde_json::from_value::<SessionRecord>(value).ok());

        Ok(match record {
            Some(SessionRecord::PendingOauth { oauth_state, .. }) => Some(oauth_state),
            _ => None,
        })
    }

    /// Stores an authenticated record under a fresh session ID.
    pub async fn authenticate(&self, auth: AuthenticatedSession) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_DASHBOARD_RECORD, SessionRecord::Authenticated(auth))
            .await?;

        Ok(())
    }

    /// Gets the authenticated session, or `None` for anonymous, pending and expired sessions.
    pub async fn authenticated(&self) -> Result<Option<AuthenticatedSession>, AppError> {
        Ok(match self.record().await? {
            Some(SessionRecord::Authenticated(auth)) => Some(auth),
            _ => None,
        })
    }

    /// Removes the dashboard record, leaving the session itself in place.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.remove_value(SESSION_DASHBOARD_RECORD).await?;

        Ok(())
    }

    /// Deletes the session from the store and expires the cookie.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.flush().await?;

        Ok(())
    }
}
