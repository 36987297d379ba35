use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The session is anonymous, pending OAuth, or expired.
    ///
    /// Results in a uniform 401 Unauthorized response.
    #[error("Request requires an authenticated session")]
    NotAuthenticated,

    /// The session is authenticated but lacks access to the requested resource.
    ///
    /// The message is logged only; the client receives a generic 403.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// The state returned by Discord does not match the pending session state, or no
    /// OAuth flow was pending.
    #[error("OAuth state does not match the pending session state")]
    StateMismatch,

    /// The OAuth callback was missing its `code` or `state` parameter.
    #[error("OAuth callback is missing code or state")]
    InvalidCallback,

    /// Discord redirected back with an `error` parameter.
    #[error("Discord denied the authorization request: {0}")]
    ProviderDenied(String),

    /// The token exchange or a profile/guild fetch failed or returned non-2xx.
    #[error("Discord request failed: {0}")]
    UpstreamAuth(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Callback failures never reach this mapping since the callback handler turns them into
/// redirects; it exists for API callers hitting the same errors directly.
///
/// # Returns
/// - 400 Bad Request - For state and callback failures
/// - 401 Unauthorized - For `NotAuthenticated`
/// - 403 Forbidden - For `AccessDenied`
/// - 502 Bad Gateway - For `UpstreamAuth`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotAuthenticated => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::AccessDenied(reason) => {
                tracing::debug!("Access denied: {}", reason);
                (StatusCode::FORBIDDEN, "Access denied")
            }
            Self::StateMismatch | Self::InvalidCallback | Self::ProviderDenied(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::UpstreamAuth(reason) => {
                tracing::warn!("Upstream authentication failure: {}", reason);
                (StatusCode::BAD_GATEWAY, "Failed to authenticate with Discord")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
