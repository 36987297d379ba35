use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_API_URL: &str = "https://discord.com/api";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Minimum length of `SESSION_SECRET`, the size of a cookie signing key.
const MIN_SESSION_SECRET_LEN: usize = 64;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    /// Bot account token; the guild membership source stays disconnected without it.
    pub discord_bot_token: Option<String>,

    pub session_secret: String,
    pub session_secure_cookie: bool,

    /// Discord user IDs allowed to update the bot status.
    pub owner_ids: Vec<String>,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    pub discord_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let session_secret = required("SESSION_SECRET")?;
        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "SESSION_SECRET".to_string(),
                reason: format!("must be at least {} bytes", MIN_SESSION_SECRET_LEN),
            }
            .into());
        }

        let session_secure_cookie = match optional("SESSION_SECURE_COOKIE") {
            Some(value) => value.parse::<bool>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "SESSION_SECURE_COOKIE".to_string(),
                reason: e.to_string(),
            })?,
            None => false,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_bot_token: optional("DISCORD_BOT_TOKEN"),
            session_secret,
            session_secure_cookie,
            owner_ids: optional("OWNER_IDS")
                .map(|ids| parse_owner_ids(&ids))
                .unwrap_or_default(),
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_api_url: DISCORD_API_URL.to_string(),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and empty values are both treated as absent.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_owner_ids(ids: &str) -> Vec<String> {
    ids.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
impl Config {
    /// Configuration pointing every Discord endpoint at a local mock server.
    pub fn for_test(token_url: String, api_url: String) -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            discord_client_id: "client-id".to_string(),
            discord_client_secret: "client-secret".to_string(),
            discord_redirect_url: "http://localhost:8080/auth/discord/callback".to_string(),
            discord_bot_token: None,
            session_secret: "s".repeat(MIN_SESSION_SECRET_LEN),
            session_secure_cookie: false,
            owner_ids: vec!["100".to_string()],
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: token_url,
            discord_api_url: api_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_ids_ignoring_blanks() {
        let ids = parse_owner_ids(" 100, ,200 ,");

        assert_eq!(ids, vec!["100".to_string(), "200".to_string()]);
    }
}
