use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        bot::{BotGuildDto, BotInfoDto},
    },
    server::{
        error::{bot::BotError, AppError},
        state::AppState,
    },
};

/// Tag for grouping bot gateway endpoints in OpenAPI documentation
pub static DISCORD_TAG: &str = "discord";

/// List the guilds the bot is connected to.
///
/// # Returns
/// - `200 OK` - Bot guilds
/// - `400 Bad Request` - Bot not connected
/// - `401 Unauthorized` - No authenticated session
#[utoipa::path(
    get,
    path = "/api/discord/guilds",
    tag = DISCORD_TAG,
    responses(
        (status = 200, description = "Bot guilds", body = Vec<BotGuildDto>),
        (status = 400, description = "Discord bot not connected", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto)
    ),
)]
pub async fn get_guilds(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    if !state.bot.connection_status().await {
        return Err(BotError::Disconnected.into());
    }

    let guilds: Vec<BotGuildDto> = state
        .bot
        .list_guilds()
        .await
        .into_iter()
        .map(|guild| guild.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(guilds)))
}

/// Get live statistics for the bot account.
///
/// # Returns
/// - `200 OK` - Tag, ping, guild and member counts, uptime in days
/// - `400 Bad Request` - Bot not connected
/// - `401 Unauthorized` - No authenticated session
#[utoipa::path(
    get,
    path = "/api/discord/stats",
    tag = DISCORD_TAG,
    responses(
        (status = 200, description = "Bot statistics", body = BotInfoDto),
        (status = 400, description = "Discord bot not connected", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let info = state.bot.try_info().await?;

    Ok((StatusCode::OK, Json(info.into_dto())))
}
