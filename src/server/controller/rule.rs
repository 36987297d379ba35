use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        rule::{CreateRuleDto, RuleDto, UpdateRuleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::rule::{CreateRuleParams, UpdateRuleParams},
        service::rule::RuleService,
        state::AppState,
    },
};

/// Tag for grouping rule endpoints in OpenAPI documentation
pub static RULE_TAG: &str = "rule";

/// Get all rules for a server.
///
/// # Access Control
/// - `ManageServer` - Server must be in the session's authorized set
///
/// # Returns
/// - `200 OK` - Rules ordered by ID
/// - `401 Unauthorized` - No authenticated session
/// - `403 Forbidden` - Server not authorized for this session
#[utoipa::path(
    get,
    path = "/api/servers/{server_id}/rules",
    tag = RULE_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Rules for the server", body = Vec<RuleDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rules(
    State(state): State<AppState>,
    session: Session,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::ManageServer(&server_id)])
        .await?;

    let rules: Vec<RuleDto> = RuleService::new(&state.db)
        .get_by_server_id(&server_id)
        .await?
        .into_iter()
        .map(|rule| rule.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(rules)))
}

/// Create a rule for a server.
///
/// The signed-in user is recorded as the rule's author. New rules are active unless
/// `isActive` is false.
///
/// # Access Control
/// - `ManageServer` - Server must be in the session's authorized set
///
/// # Returns
/// - `201 Created` - The created rule
/// - `400 Bad Request` - Invalid rule data
/// - `401 Unauthorized` - No authenticated session
/// - `403 Forbidden` - Server not authorized for this session
/// - `404 Not Found` - Server has no persisted record
#[utoipa::path(
    post,
    path = "/api/servers/{server_id}/rules",
    tag = RULE_TAG,
    params(
        ("server_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = CreateRuleDto,
    responses(
        (status = 201, description = "Created rule", body = RuleDto),
        (status = 400, description = "Invalid rule data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rule(
    State(state): State<AppState>,
    session: Session,
    Path(server_id): Path<String>,
    payload: Result<Json<CreateRuleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&session)
        .require(&[Permission::ManageServer(&server_id)])
        .await?;

    let Json(payload) = payload.map_err(invalid_rule_data)?;
    let params = CreateRuleParams::from_dto(server_id, auth.identity.id, payload)?;

    let rule = RuleService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(rule.into_dto())))
}

/// Update a rule.
///
/// Absent fields keep their stored values. Access is checked against the server that
/// owns the rule.
///
/// # Returns
/// - `200 OK` - The updated rule
/// - `400 Bad Request` - Invalid rule data
/// - `401 Unauthorized` - No authenticated session
/// - `403 Forbidden` - Owning server not authorized for this session
/// - `404 Not Found` - No rule with this ID
#[utoipa::path(
    patch,
    path = "/api/rules/{id}",
    tag = RULE_TAG,
    params(
        ("id" = i32, Path, description = "Rule ID")
    ),
    request_body = UpdateRuleDto,
    responses(
        (status = 200, description = "Updated rule", body = RuleDto),
        (status = 400, description = "Invalid rule data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Rule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_rule(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateRuleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let service = RuleService::new(&state.db);
    let guard = AuthGuard::new(&session);

    guard.require(&[]).await?;

    let rule = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Rule not found".to_string()))?;

    guard
        .require(&[Permission::ManageServer(&rule.server_id)])
        .await?;

    let Json(payload) = payload.map_err(invalid_rule_data)?;
    let params = UpdateRuleParams::from_dto(payload)?;

    let rule = service.update(id, params).await?;

    Ok((StatusCode::OK, Json(rule.into_dto())))
}

/// Delete a rule.
///
/// # Returns
/// - `204 No Content` - Rule deleted
/// - `401 Unauthorized` - No authenticated session
/// - `403 Forbidden` - Owning server not authorized for this session
/// - `404 Not Found` - No rule with this ID
#[utoipa::path(
    delete,
    path = "/api/rules/{id}",
    tag = RULE_TAG,
    params(
        ("id" = i32, Path, description = "Rule ID")
    ),
    responses(
        (status = 204, description = "Rule deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Rule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_rule(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RuleService::new(&state.db);
    let guard = AuthGuard::new(&session);

    guard.require(&[]).await?;

    let rule = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Rule not found".to_string()))?;

    guard
        .require(&[Permission::ManageServer(&rule.server_id)])
        .await?;

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn invalid_rule_data(rejection: JsonRejection) -> AppError {
    tracing::debug!("Rejected rule payload: {}", rejection);

    AppError::BadRequest("Invalid rule data".to_string())
}
