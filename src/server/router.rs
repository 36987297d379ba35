use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{callback, get_user, login, logout},
        bot_status::{get_bot_status, update_bot_status},
        discord::{get_guilds, get_stats},
        rule::{create_rule, delete_rule, get_rules, update_rule},
        server::{get_server, get_servers},
        statistics::{get_statistics, get_uptime},
    },
    docs::ApiDoc,
    middleware::auth::require_auth,
    state::AppState,
};

/// Builds the application routes.
///
/// Everything under `protected` passes the authentication gate before reaching its
/// handler. The session layer must be applied by the caller.
pub fn router() -> Router<AppState> {
    let public = Router::new()
        .route("/auth/discord", get(login))
        .route("/auth/discord/callback", get(callback))
        .route("/auth/user", get(get_user))
        .route("/auth/logout", post(logout))
        .route("/api/bot-status", get(get_bot_status).post(update_bot_status));

    let protected = Router::new()
        .route("/api/servers", get(get_servers))
        .route("/api/servers/{server_id}", get(get_server))
        .route(
            "/api/servers/{server_id}/rules",
            get(get_rules).post(create_rule),
        )
        .route("/api/rules/{id}", patch(update_rule).delete(delete_rule))
        .route("/api/servers/{server_id}/statistics", get(get_statistics))
        .route("/api/servers/{server_id}/uptime", get(get_uptime))
        .route("/api/discord/guilds", get(get_guilds))
        .route("/api/discord/stats", get(get_stats))
        .route_layer(middleware::from_fn(require_auth));

    Router::new()
        .merge(public)
        .merge(protected)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
