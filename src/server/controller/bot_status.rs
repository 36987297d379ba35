use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        bot::{BotStatusDto, UpdateBotStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::bot::UpdateBotStatusParams,
        service::bot_status::BotStatusService,
        state::AppState,
    },
};

/// Tag for grouping bot status endpoints in OpenAPI documentation
pub static BOT_STATUS_TAG: &str = "bot-status";

/// Get the current bot status.
///
/// Public. Reports `online` with no message or announcement when no status has been
/// recorded yet.
#[utoipa::path(
    get,
    path = "/api/bot-status",
    tag = BOT_STATUS_TAG,
    responses(
        (status = 200, description = "Current bot status", body = BotStatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bot_status(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let status = BotStatusService::new(&state.db).get_current().await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

/// Set the bot status.
///
/// # Access Control
/// - `Owner` - Identity must be listed in `OWNER_IDS`
///
/// # Returns
/// - `200 OK` - The recorded status
/// - `400 Bad Request` - Invalid bot status data
/// - `401 Unauthorized` - No authenticated session
/// - `403 Forbidden` - Not an owner
#[utoipa::path(
    post,
    path = "/api/bot-status",
    tag = BOT_STATUS_TAG,
    request_body = UpdateBotStatusDto,
    responses(
        (status = 200, description = "Recorded status", body = BotStatusDto),
        (status = 400, description = "Invalid bot status data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_bot_status(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<UpdateBotStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&session)
        .require(&[Permission::Owner(&state.config.owner_ids)])
        .await?;

    let Json(payload) = payload
        .map_err(|_| AppError::BadRequest("Invalid bot status data".to_string()))?;
    let params = UpdateBotStatusParams::from_dto(auth.identity.id, payload)?;

    let status = BotStatusService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}
