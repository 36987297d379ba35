use oauth2::{AccessToken, AuthorizationCode, TokenResponse};
use serde::de::DeserializeOwned;
use std::fmt::Display;

use crate::server::{
    error::auth::AuthError,
    model::{guild::GuildMembership, identity::Identity},
    service::oauth::DiscordAuthService,
};

impl<'a> DiscordAuthService<'a> {
    /// Exchanges an authorization code for an access token.
    ///
    /// # Returns
    /// - `Ok(AccessToken)` - Token for reading the user's profile and guilds
    /// - `Err(AuthError::UpstreamAuth)` - Discord rejected the code or was unreachable
    pub async fn exchange_code(&self, code: String) -> Result<AccessToken, AuthError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(self.http_client)
            .await
            .map_err(upstream)?;

        Ok(token.access_token().clone())
    }

    /// Fetches the profile of the token's owner from `/users/@me`.
    pub async fn fetch_profile(&self, token: &AccessToken) -> Result<Identity, AuthError> {
        self.get_json("/users/@me", token).await
    }

    /// Fetches the guilds of the token's owner from `/users/@me/guilds`.
    pub async fn fetch_user_guilds(
        &self,
        token: &AccessToken,
    ) -> Result<Vec<GuildMembership>, AuthError> {
        self.get_json("/users/@me/guilds", token).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &AccessToken,
    ) -> Result<T, AuthError> {
        self.http_client
            .get(format!("{}{}", self.api_url, path))
            .bearer_auth(token.secret())
            .send()
            .await
            .map_err(upstream)?
            .error_for_status()
            .map_err(upstream)?
            .json::<T>()
            .await
            .map_err(upstream)
    }
}

fn upstream(err: impl Display) -> AuthError {
    AuthError::UpstreamAuth(err.to_string())
}
