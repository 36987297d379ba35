use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        server::{AuthorizedServerDto, DiscordServerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::server::ServerService,
        state::AppState,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// List the servers the signed-in user may administer.
///
/// The list is the authorized set resolved at login; it is not refreshed until the
/// user logs in again.
///
/// # Returns
/// - `200 OK` - Authorized servers
/// - `401 Unauthorized` - No authenticated session
#[utoipa::path(
    get,
    path = "/api/servers",
    tag = SERVER_TAG,
    responses(
        (status = 200, description = "Authorized servers", body = Vec<AuthorizedServerDto>),
        (status = 401, description = "Authentication required", body = ErrorDto)
    ),
)]
pub async fn get_servers(session: Session) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&session).require(&[]).await?;

    let servers: Vec<AuthorizedServerDto> = auth
        .servers
        .into_iter()
        .map(|server| server.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(servers)))
}

/// Get the persisted record for a server.
///
/// # Access Control
/// - `ManageServer` - Server must be in the session's authorized set
///
/// # Returns
/// - `200 OK` - Server record
/// - `401 Unauthorized` - No authenticated session
/// - `403 Forbidden` - Server not authorized for this session
/// - `404 Not Found` - No persisted record
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}",
    tag = SERVER_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Server record", body = DiscordServerDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server(
    State(state): State<AppState>,
    session: Session,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::ManageServer(&server_id)])
        .await?;

    let server = ServerService::new(&state.db)
        .get_by_id(&server_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Server not found".to_string()))?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}
