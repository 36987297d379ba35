//! Login orchestration for the OAuth callback.

use sea_orm::DatabaseConnection;

use crate::server::{
    bot::BotConnection,
    data::{discord_server::DiscordServerRepository, user::UserRepository},
    error::AppError,
    model::{
        guild::AuthorizedServer, identity::Identity, server::UpsertServerParam,
        user::UpsertUserParam,
    },
    service::{authorization::resolve_or_fail_closed, oauth::DiscordAuthService},
};

/// Identity and authorized servers for a completed login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub identity: Identity,
    pub servers: Vec<AuthorizedServer>,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    discord: DiscordAuthService<'a>,
    bot: &'a BotConnection,
    owner_ids: &'a [String],
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        discord: DiscordAuthService<'a>,
        bot: &'a BotConnection,
        owner_ids: &'a [String],
    ) -> Self {
        Self {
            db,
            discord,
            bot,
            owner_ids,
        }
    }

    /// Completes a login from the callback's authorization code.
    ///
    /// Exchanges the code, reads the user's profile and guilds, and resolves the
    /// authorized server set against the bot's guilds. The user row and every authorized
    /// server are upserted before returning.
    ///
    /// # Returns
    /// - `Ok(LoginOutcome)` - Login succeeded; `servers` is empty if the bot is unavailable
    /// - `Err(AppError::AuthErr(UpstreamAuth))` - Token exchange, profile or user guild
    ///   fetch failed
    /// - `Err(AppError::DbErr)` - Persisting the user or servers failed
    pub async fn login(&self, code: String) -> Result<LoginOutcome, AppError> {
        let token = self.discord.exchange_code(code).await?;
        let identity = self.discord.fetch_profile(&token).await?;
        let user_guilds = self.discord.fetch_user_guilds(&token).await?;

        let bot_guilds = self.bot.try_list_guilds().await;
        let servers = resolve_or_fail_closed(Ok::<_, AppError>(user_guilds), bot_guilds);

        UserRepository::new(self.db)
            .upsert(UpsertUserParam::from_identity(&identity, self.owner_ids))
            .await?;

        let server_repo = DiscordServerRepository::new(self.db);
        for server in &servers {
            server_repo.upsert(UpsertServerParam::from(server)).await?;
        }

        tracing::info!(
            "User {} ({}) logged in with {} authorized servers",
            identity.username,
            identity.id,
            servers.len()
        );

        Ok(LoginOutcome { identity, servers })
    }
}
