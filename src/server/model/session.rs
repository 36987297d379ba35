//! Session record stored in the session store.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::server::model::{guild::AuthorizedServer, identity::Identity};

/// Days an authenticated session stays valid, counted from `authenticated_at`.
pub const SESSION_TTL_DAYS: i64 = 7;

/// The dashboard's session record.
///
/// An authorized server list only exists alongside the identity it was resolved for.
/// The absence of a record is the anonymous state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionRecord {
    /// Login redirect issued; waiting for Discord to call back with `oauth_state`.
    PendingOauth {
        oauth_state: String,
        issued_at: DateTime<Utc>,
    },
    Authenticated(AuthenticatedSession),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedSession {
    pub identity: Identity,
    pub servers: Vec<AuthorizedServer>,
    pub authenticated_at: DateTime<Utc>,
}

impl AuthenticatedSession {
    pub fn new(identity: Identity, servers: Vec<AuthorizedServer>) -> Self {
        Self {
            identity,
            servers,
            authenticated_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.authenticated_at >= Duration::days(SESSION_TTL_DAYS)
    }

    /// Whether `server_id` was in the authorized set resolved at login.
    pub fn can_manage(&self, server_id: &str) -> bool {
        self.servers.iter().any(|server| server.id == server_id)
    }
}

/// Lifecycle state derived from the stored record.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    PendingOauth,
    Authenticated,
}

#[cfg(test)]
impl From<Option<&SessionRecord>> for SessionState {
    fn from(record: Option<&SessionRecord>) -> Self {
        match record {
            None => SessionState::Anonymous,
            Some(SessionRecord::PendingOauth { .. }) => SessionState::PendingOauth,
            Some(SessionRecord::Authenticated(_)) => SessionState::Authenticated,
        }
    }
}
