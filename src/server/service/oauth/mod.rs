//! Identity exchange with Discord.
//!
//! Builds the authorize URL, trades the callback's authorization code for an access
//! token, and reads the user's profile and guild list with that token. Every upstream
//! failure, including a non-2xx response or a timeout, is an `AuthError::UpstreamAuth`.

use crate::server::state::OAuth2Client;

pub mod exchange;
pub mod login;

/// Scopes requested from Discord: profile, email and guild list.
pub const OAUTH_SCOPES: [&str; 3] = ["identify", "email", "guilds"];

/// Bytes of randomness in the OAuth `state` parameter.
pub const OAUTH_STATE_BYTES: u32 = 32;

pub struct DiscordAuthService<'a> {
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    /// Base URL of Discord's REST API, without a trailing slash.
    pub api_url: &'a str,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        api_url: &'a str,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            api_url,
        }
    }
}
