use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        statistics::{StatisticsDto, UptimeRecordDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::statistics::StatisticsService,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATISTICS_TAG: &str = "statistics";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitParams {
    /// Maximum rows to return, newest first. Values above 365 are capped.
    pub limit: Option<u64>,
}

/// Get daily statistics for a server, newest first. Defaults to 10 rows.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/statistics",
    tag = STATISTICS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID"),
        LimitParams
    ),
    responses(
        (status = 200, description = "Daily statistics", body = Vec<StatisticsDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_statistics(
    State(state): State<AppState>,
    session: Session,
    Path(server_id): Path<String>,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::ManageServer(&server_id)])
        .await?;

    let statistics: Vec<StatisticsDto> = StatisticsService::new(&state.db)
        .get_statistics(&server_id, params.limit)
        .await?
        .into_iter()
        .map(|row| row.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(statistics)))
}

/// Get uptime history for a server, newest first. Defaults to 30 rows.
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/uptime",
    tag = STATISTICS_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID"),
        LimitParams
    ),
    responses(
        (status = 200, description = "Uptime history", body = Vec<UptimeRecordDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_uptime(
    State(state): State<AppState>,
    session: Session,
    Path(server_id): Path<String>,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::ManageServer(&server_id)])
        .await?;

    let uptime: Vec<UptimeRecordDto> = StatisticsService::new(&state.db)
        .get_uptime(&server_id, params.limit)
        .await?
        .into_iter()
        .map(|row| row.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(uptime)))
}
