use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        user::UserDto,
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::DashboardSession},
        model::session::AuthenticatedSession,
        service::{auth::AuthService, oauth::DiscordAuthService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters Discord appends when redirecting back to the callback.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    /// Authorization code to exchange for an access token.
    pub code: Option<String>,
    /// State token that must match the one stored when the login started.
    pub state: Option<String>,
    /// Set by Discord when the user declined or the request was invalid.
    pub error: Option<String>,
}

/// Start a Discord login.
///
/// Generates a fresh OAuth state, stores it in the session and redirects the browser to
/// Discord's authorize page. Starting a new login discards any existing session record.
///
/// # Returns
/// - `302 Found` - Redirect to the Discord authorize URL
/// - `500 Internal Server Error` - Failed to write the session
#[utoipa::path(
    get,
    path = "/auth/discord",
    tag = AUTH_TAG,
    responses(
        (status = 302, description = "Redirect to Discord's authorize page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let oauth_state = DiscordAuthService::new_state();
    DashboardSession::new(&session)
        .begin_oauth(oauth_state.clone())
        .await?;

    let url = DiscordAuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.config.discord_api_url,
    )
    .build_authorization_url(&oauth_state);

    Ok(found(url.as_str()))
}

/// Complete a Discord login.
///
/// The pending OAuth state is consumed on every call. On success the session is
/// authenticated with the user's identity and authorized servers; on any failure the
/// session is left anonymous and the redirect carries the failure reason.
///
/// # Returns
/// - `302 Found` to `/` - Login succeeded
/// - `302 Found` to `/?error=<reason>` - `access_denied`, `invalid_request`,
///   `state_mismatch` or `auth_failed`
#[utoipa::path(
    get,
    path = "/auth/discord/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 302, description = "Redirect to the dashboard, with `error` set on failure")
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Response {
    match complete_login(&state, &session, params).await {
        Ok(()) => found("/"),
        Err(e) => {
            let reason = e.login_failure_reason();
            tracing::warn!("Login failed ({}): {}", reason, e);

            found(&format!("/?error={}", reason))
        }
    }
}

async fn complete_login(
    state: &AppState,
    session: &Session,
    params: CallbackParams,
) -> Result<(), AppError> {
    let dashboard = DashboardSession::new(session);
    let expected_state = dashboard.take_oauth_state().await?;

    if let Some(error) = params.error {
        return Err(AuthError::ProviderDenied(error).into());
    }

    let (Some(code), Some(returned_state)) = (params.code, params.state) else {
        return Err(AuthError::InvalidCallback.into());
    };

    if expected_state.as_deref() != Some(returned_state.as_str()) {
        return Err(AuthError::StateMismatch.into());
    }

    let discord = DiscordAuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.config.discord_api_url,
    );
    let outcome = AuthService::new(&state.db, discord, &state.bot, &state.config.owner_ids)
        .login(code)
        .await?;

    dashboard
        .authenticate(AuthenticatedSession::new(outcome.identity, outcome.servers))
        .await?;

    Ok(())
}

/// Get the signed-in user.
///
/// # Returns
/// - `200 OK` - Identity of the signed-in user
/// - `401 Unauthorized` - No authenticated session
#[utoipa::path(
    get,
    path = "/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in user", body = UserDto),
        (status = 401, description = "Authentication required", body = ErrorDto)
    ),
)]
pub async fn get_user(session: Session) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&session).require(&[]).await?;

    Ok((StatusCode::OK, Json(auth.identity.into_dto())))
}

/// Log out.
///
/// Deletes the session from the store and expires the session cookie.
///
/// # Returns
/// - `200 OK` - `{"success":true}`
/// - `500 Internal Server Error` - `{"error":"Failed to logout"}`
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = SuccessDto),
        (status = 500, description = "Failed to logout", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Response {
    match DashboardSession::new(&session).logout().await {
        Ok(()) => (StatusCode::OK, Json(SuccessDto { success: true })).into_response(),
        Err(e) => {
            tracing::error!("Failed to logout: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    error: "Failed to logout".to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
